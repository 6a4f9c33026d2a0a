//! SQLite storage implementation for the expense sheet.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `expensesheet-core` and contains:
//! - Database connection pooling and pragmas
//! - Embedded Diesel migrations
//! - A single writer actor that runs every write in one immediate transaction
//! - Repository implementations for all domain entities
//!
//! This crate is the only place in the application where Diesel dependencies exist.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Repository implementations
pub mod analytics;
pub mod categories;
pub mod expenses;
pub mod paid_types;
pub mod statuses;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, ping, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use analytics::AnalyticsRepository;
pub use categories::CategoryRepository;
pub use expenses::MonthlyExpenseRepository;
pub use paid_types::PaidTypeRepository;
pub use statuses::StatusRepository;

// Re-export from expensesheet-core for convenience
pub use expensesheet_core::errors::{DatabaseError, Error, Result};
