//! Error types for catalog validation
//!
//! Evaluation itself never fails — malformed sub-inputs degrade to
//! zero amounts. The only fallible surface is the catalog contract the
//! engine assumes, checked at load time by the persistence collaborator.

use thiserror::Error;

/// Violations of the fee catalog input contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate fee id: {fee_id}")]
    DuplicateFeeId { fee_id: String },

    #[error("Duplicate evaluation order {order} (fee {fee_id})")]
    DuplicateOrder { fee_id: String, order: u32 },

    #[error("Catalog not sorted ascending by order at fee {fee_id}")]
    UnsortedCatalog { fee_id: String },

    #[error("Fee {fee_id} has no options")]
    NoOptions { fee_id: String },

    #[error("Duplicate option id {option_id} in fee {fee_id}")]
    DuplicateOptionId { fee_id: String, option_id: String },
}
