use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deadpool_sqlite::HookError;
use serde_json::json;
use shared::api::error::ValidationError;

pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new<S: Into<String>>(code: StatusCode, message: S) -> Self {
        AppError { code, message: message.into() }
    }

    /// Covers both genuinely unknown and malformed identifiers; a bad id must
    /// degrade to "not found" rather than surface a parse failure
    pub fn user_not_found() -> Self {
        AppError::new(StatusCode::NOT_FOUND, "User not found")
    }

    pub fn validation(err: ValidationError) -> Self {
        AppError::new(StatusCode::BAD_REQUEST, err.error_messages.join(", "))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppError {}: {}", self.code, self.message)
    }
}

// Render AppError into a response. The body mirrors the original API's
// `{"error": message}` shape
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.code, Json(json!({ "error": self.message }))).into_response()
    }
}

// This enables using `?` on functions that return `Result<_, Error>` to turn
// them into `Result<_, AppError>`. That way you don't need to do that manually.
impl<E> From<E> for AppError
where
    E: Into<Box<dyn std::error::Error>>,
{
    #[track_caller]
    fn from(err: E) -> Self {
        AppError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {:?}", err.into()),
        )
    }
}

impl From<AppError> for HookError {
    fn from(err: AppError) -> Self {
        Self::Message(err.to_string())
    }
}
