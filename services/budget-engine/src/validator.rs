//! Fee catalog validation
//!
//! The cascade assumes a well-formed catalog (unique ascending order,
//! unique ids, at least one option per fee). Evaluation never checks
//! this — it degrades malformed entries to zero — so the persistence
//! collaborator runs this validator once at catalog load time.

use std::collections::HashSet;
use types::errors::CatalogError;
use types::fee::ClientFee;

/// Validate the fee catalog input contract.
pub fn validate_catalog(catalog: &[ClientFee]) -> Result<(), CatalogError> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut last_order: Option<u32> = None;

    for fee in catalog {
        if !seen_ids.insert(fee.id.as_str()) {
            return Err(CatalogError::DuplicateFeeId {
                fee_id: fee.id.to_string(),
            });
        }

        if let Some(prev) = last_order {
            if fee.order == prev {
                return Err(CatalogError::DuplicateOrder {
                    fee_id: fee.id.to_string(),
                    order: fee.order,
                });
            }
            if fee.order < prev {
                return Err(CatalogError::UnsortedCatalog {
                    fee_id: fee.id.to_string(),
                });
            }
        }
        last_order = Some(fee.order);

        if fee.options.is_empty() {
            return Err(CatalogError::NoOptions {
                fee_id: fee.id.to_string(),
            });
        }

        let mut seen_options: HashSet<&str> = HashSet::new();
        for option in &fee.options {
            if !seen_options.insert(option.id.as_str()) {
                return Err(CatalogError::DuplicateOptionId {
                    fee_id: fee.id.to_string(),
                    option_id: option.id.to_string(),
                });
            }
        }
    }

    Ok(())
}
