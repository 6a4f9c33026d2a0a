use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use expensesheet_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

/// Error envelope: `{ "status": "error", "message": ..., "error": ... }`.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: &'static str,
    error: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
                CoreError::NotFound(_) | CoreError::Database(DatabaseError::NotFound(_)) => {
                    (StatusCode::NOT_FOUND, "Resource not found")
                }
                CoreError::ConstraintViolation(_)
                | CoreError::Database(DatabaseError::UniqueViolation(_)) => {
                    (StatusCode::CONFLICT, "Resource already exists")
                }
                // The client referenced a lookup row that does not exist.
                CoreError::Database(DatabaseError::ForeignKeyViolation(_)) => {
                    (StatusCode::BAD_REQUEST, "Referenced resource does not exist")
                }
                CoreError::Dependency(_) | CoreError::Database(_) | CoreError::Unexpected(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
            },
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = Json(ErrorBody {
            status: "error",
            message,
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
