//! Types library for the budget & fee calculation engine
//!
//! This library provides the data model shared by every consumer of the
//! engine (the bulk table, the detail editor, the persistence layer),
//! ensuring type safety and deterministic behavior.
//!
//! # Modules
//! - `ids`: Unique identifiers (FeeId, OptionId, TacticId)
//! - `fee`: Fee catalog and per-tactic assignment types
//! - `budget`: Budget inputs and calculation outputs
//! - `errors`: Catalog validation error taxonomy

// Public modules
pub mod ids;
pub mod fee;
pub mod budget;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::budget::*;
    pub use crate::errors::*;
    pub use crate::fee::*;
    pub use crate::ids::*;
}
