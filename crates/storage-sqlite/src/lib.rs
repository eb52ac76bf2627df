//! SQLite storage implementation for Budgetbook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `budgetbook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users, budgets and expenses
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod budgets;
pub mod expenses;
pub mod users;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use users::UserRepository;

// Re-export from budgetbook-core for convenience
pub use budgetbook_core::errors::{DatabaseError, Error, Result};
