//! Budgetbook Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for Budgetbook: registration and
//! login, monthly budgets, expenses, and the dashboard/report aggregates.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod budgets;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod outcome;
pub mod reports;
pub mod users;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the per-request types every handler needs
pub use outcome::{ActionOutcome, Destination, Flash, FlashCategory};
pub use users::SessionUser;
pub use utils::time_utils::{Clock, SystemClock};
