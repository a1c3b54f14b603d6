// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use thiserror::Error;

use crate::message::ErrorBody;

const MAX_LOGGED_BODY: usize = 512;

/// Cut a provider body down to something safe to put in a log line.
pub fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_LOGGED_BODY) {
        Some((end, _)) => format!("{}... ({} bytes total)", &body[..end], body.len()),
        None => body.to_string(),
    }
}

/// Failures from the generative-AI provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {}", truncate_body(.body))]
    Status { status: u16, body: String },

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("could not decode provider response: {0}")]
    Decode(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("GEMINI_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Validation { status, message } => (status, "validation_error", message),
            AppError::Provider(e) => {
                tracing::error!(error = %e, "provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "provider_error",
                    "Failed to generate a reply".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            error: error.to_string(),
            message,
        });
        (status, body).into_response()
    }
}
