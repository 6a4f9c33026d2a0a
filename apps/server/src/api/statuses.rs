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
use expensesheet_core::statuses::{NewStatus, Status};

async fn list_statuses(State(state): State<Arc<AppState>>) -> ApiResult<Reply<Vec<Status>>> {
    let statuses = state.status_service.get_statuses()?;
    Ok(ok("Statuses retrieved", statuses))
}

async fn create_status(
    State(state): State<Arc<AppState>>,
    ApiJson(status): ApiJson<NewStatus>,
) -> ApiResult<Reply<Status>> {
    let status = state.status_service.create_status(status).await?;
    Ok(created("Status created", status))
}

async fn delete_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Reply<()>> {
    state.status_service.delete_status(&id).await?;
    Ok(ok("Status deleted", ()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(list_statuses).post(create_status))
        .route("/status/{id}", delete(delete_status))
}
