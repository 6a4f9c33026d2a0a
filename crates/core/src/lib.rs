//! Expense Sheet Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for monthly expense tracking.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod analytics;
pub mod categories;
pub mod errors;
pub mod expenses;
pub mod paid_types;
pub mod statuses;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
