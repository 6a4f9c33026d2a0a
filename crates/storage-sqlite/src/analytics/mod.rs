//! SQLite queries backing the dashboard.

mod repository;

pub use repository::AnalyticsRepository;
