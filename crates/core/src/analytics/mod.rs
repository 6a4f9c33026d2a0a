//! Month-windowed dashboard analytics.

mod analytics_model;
mod analytics_service;
mod analytics_traits;


pub use analytics_model::{MonthlyTotals, PendingPayment};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::{AnalyticsRepositoryTrait, AnalyticsServiceTrait};
