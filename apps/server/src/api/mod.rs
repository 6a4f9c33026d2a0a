use std::sync::Arc;

use crate::{
    config::Config,
    error::ApiResult,
    main_lib::AppState,
};
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    routing::get,
    Router,
};
use expensesheet_storage_sqlite::db;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod analytics;
mod categories;
mod expenses;
mod paid_types;
pub mod shared;
mod statuses;

pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the database answers a trivial query.
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    db::ping(&state.pool)?;
    Ok("ok")
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(categories::router())
        .merge(expenses::router())
        .merge(statuses::router())
        .merge(paid_types::router())
        .merge(analytics::router());

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
