use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid category.")]
    InvalidCategory,
    #[error("Not found.")]
    NotFound,
    #[error("Request body is too large.")]
    PayloadTooLarge,
    /// Carries the database error message as-is.
    #[error("{0}")]
    Persistence(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidCategory => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub trait ResultExt<T> {
    /// Turn a store failure into a 500, logging `context` with the full error.
    fn reject(self, context: &str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for color_eyre::Result<T> {
    fn reject(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{context}: {e:?}");
            AppError::Persistence(e.to_string())
        })
    }
}
