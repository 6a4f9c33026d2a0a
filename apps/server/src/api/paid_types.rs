use std::sync::Arc;

use crate::{
    api::shared::{created, ok, ApiJson, Reply},
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Router,
};
use expensesheet_core::paid_types::{NewPaidType, PaidType};

async fn list_paid_types(State(state): State<Arc<AppState>>) -> ApiResult<Reply<Vec<PaidType>>> {
    let paid_types = state.paid_type_service.get_paid_types()?;
    Ok(ok("Paid types retrieved", paid_types))
}

async fn create_paid_type(
    State(state): State<Arc<AppState>>,
    ApiJson(paid_type): ApiJson<NewPaidType>,
) -> ApiResult<Reply<PaidType>> {
    let paid_type = state.paid_type_service.create_paid_type(paid_type).await?;
    Ok(created("Paid type created", paid_type))
}

async fn delete_paid_type(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Reply<()>> {
    state.paid_type_service.delete_paid_type(&id).await?;
    Ok(ok("Paid type deleted", ()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/paid-types", get(list_paid_types).post(create_paid_type))
        .route("/paid-types/{id}", delete(delete_paid_type))
}
