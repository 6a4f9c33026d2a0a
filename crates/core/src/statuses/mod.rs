//! Payment statuses - lookup rows referenced by monthly expenses.

mod statuses_model;
mod statuses_service;
mod statuses_traits;

#[cfg(test)]
mod statuses_service_tests;

pub use statuses_model::{KnownStatus, NewStatus, Status};
pub use statuses_service::StatusService;
pub use statuses_traits::{StatusRepositoryTrait, StatusServiceTrait};
