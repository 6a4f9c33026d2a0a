//! Paid types - how a monthly expense was paid (card, transfer, cash, ...).

mod paid_types_model;
mod paid_types_service;
mod paid_types_traits;

#[cfg(test)]
mod paid_types_service_tests;

pub use paid_types_model::{NewPaidType, PaidType};
pub use paid_types_service::PaidTypeService;
pub use paid_types_traits::{PaidTypeRepositoryTrait, PaidTypeServiceTrait};
