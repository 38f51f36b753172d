//! Budget & Fee Calculation Service
//!
//! Given a tactic's budget inputs and a client's ordered fee catalog,
//! computes the media budget, client (all-in) budget, unit volume,
//! bonification, and the monetary amount of each fee — identically for
//! every consumer that renders or edits the numbers.
//!
//! Pure synchronous computation: no I/O, no shared state, deterministic
//! to the cent for identical inputs.

pub mod cascade;
pub mod dependency;
pub mod engine;
pub mod inputs;
pub mod reconcile;
pub mod validator;

mod rounding;

pub use engine::{BudgetEngine, BudgetEngineConfig};
