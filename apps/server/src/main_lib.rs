use std::sync::Arc;

use crate::config::Config;
use expensesheet_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    expenses::{MonthlyExpenseService, MonthlyExpenseServiceTrait},
    paid_types::{PaidTypeService, PaidTypeServiceTrait},
    statuses::{StatusService, StatusServiceTrait},
};
use expensesheet_storage_sqlite::{
    db::{self, DbPool},
    AnalyticsRepository, CategoryRepository, MonthlyExpenseRepository, PaidTypeRepository,
    StatusRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub pool: Arc<DbPool>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub expense_service: Arc<dyn MonthlyExpenseServiceTrait>,
    pub status_service: Arc<dyn StatusServiceTrait>,
    pub paid_type_service: Arc<dyn PaidTypeServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("ES_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let expense_repo = Arc::new(MonthlyExpenseRepository::new(pool.clone(), writer.clone()));
    let status_repo = Arc::new(StatusRepository::new(pool.clone(), writer.clone()));
    let paid_type_repo = Arc::new(PaidTypeRepository::new(pool.clone(), writer.clone()));
    let analytics_repo = Arc::new(AnalyticsRepository::new(pool.clone()));

    let category_service = Arc::new(CategoryService::new(category_repo.clone()));
    let expense_service = Arc::new(MonthlyExpenseService::new(expense_repo, category_repo));
    let status_service = Arc::new(StatusService::new(status_repo));
    let paid_type_service = Arc::new(PaidTypeService::new(paid_type_repo));
    let analytics_service = Arc::new(AnalyticsService::new(analytics_repo));

    Ok(Arc::new(AppState {
        pool,
        category_service,
        expense_service,
        status_service,
        paid_type_service,
        analytics_service,
    }))
}
