use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pricing::LayoutError;
use crate::quote::aggregator::QuoteError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Quote not generated. Reason: no Material specified.")]
    NoMaterialSelected,

    #[error("{0}")]
    Layout(#[from] LayoutError),

    #[error("No quote to copy. Please calculate prices first.")]
    NoQuoteAvailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::NoMaterialSelected => AppError::NoMaterialSelected,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NoMaterialSelected => {
                tracing::warn!("Quote blocked: no material selected");
                (
                    StatusCode::BAD_REQUEST,
                    "NO_MATERIAL_SELECTED",
                    self.to_string(),
                )
            }
            AppError::Layout(e) => {
                let code = match e {
                    LayoutError::InvalidDimensions => "INVALID_DIMENSIONS",
                    LayoutError::ExceedsRollWidth => "EXCEEDS_ROLL_WIDTH",
                };
                (StatusCode::UNPROCESSABLE_ENTITY, code, e.to_string())
            }
            AppError::NoQuoteAvailable => {
                (StatusCode::NOT_FOUND, "NO_QUOTE_AVAILABLE", self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
