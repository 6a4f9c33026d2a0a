use std::sync::Arc;

use crate::{
    api::shared::{ok, ApiQuery, Reply},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::get,
    Router,
};
use expensesheet_core::analytics::{MonthlyTotals, PendingPayment};
use serde::Deserialize;

#[derive(Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

async fn get_totals(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Reply<MonthlyTotals>> {
    let totals = state.analytics_service.get_totals(query.month.as_deref())?;
    Ok(ok("Monthly totals retrieved", totals))
}

async fn get_pending_payments(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Reply<Vec<PendingPayment>>> {
    let pending = state
        .analytics_service
        .get_pending_payments(query.month.as_deref())?;
    Ok(ok("Pending payments retrieved", pending))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/analytic/total", get(get_totals))
        .route(
            "/dashboard/analytic/pending-payments",
            get(get_pending_payments),
        )
}
