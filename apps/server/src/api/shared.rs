use axum::{
    extract::{FromRequest, FromRequestParts},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::ApiError;

/// JSON body extractor whose rejections use the API error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor with the same rejection handling as [`ApiJson`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Success envelope: `{ "status": "success", "message": ..., "data": ... }`.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

pub type Reply<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn ok<T: Serialize>(message: impl Into<String>, data: T) -> Reply<T> {
    respond(StatusCode::OK, message, data)
}

pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> Reply<T> {
    respond(StatusCode::CREATED, message, data)
}

fn respond<T: Serialize>(status: StatusCode, message: impl Into<String>, data: T) -> Reply<T> {
    (
        status,
        Json(ApiResponse {
            status: "success",
            message: message.into(),
            data,
        }),
    )
}
