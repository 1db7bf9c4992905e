//! Mapping of application errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use salesbook_shared::{AppError, FieldError};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use tracing::error;

/// Handler error. Renders as `{"error": code, "message": text}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// 404 with a user-facing message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(AppError::NotFound(message.into()))
    }

    /// 401 with a user-facing message.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(AppError::Unauthorized(message.into()))
    }

    /// 400 listing the rejected fields.
    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self(AppError::Validation(fields))
    }

    /// 500 for failures outside the store.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self(AppError::Internal(detail.to_string()))
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            return Self(AppError::Conflict(detail));
        }
        Self(AppError::Database(err.to_string()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::invalid_field("body", &rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = self.0.error_code();

        if self.0.is_server_error() {
            error!(error = %self.0, code, "Request failed");
        }

        let body = match self.0 {
            AppError::Validation(details) => json!({
                "error": code,
                "message": "Dados inválidos",
                "details": details,
            }),
            AppError::Database(_) | AppError::Internal(_) => {
                json!({ "error": code, "message": "An error occurred" })
            }
            AppError::Unauthorized(message)
            | AppError::NotFound(message)
            | AppError::Conflict(message) => json!({ "error": code, "message": message }),
        };

        (status, Json(body)).into_response()
    }
}
