//! Error taxonomy for the service.
//!
//! Every failure is scoped to the request that triggered it; nothing here is
//! retried and nothing terminates the process. [`ApiError`] maps each
//! variant onto the HTTP response contract of the front door.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    Missing { name: &'static str },

    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// Failures of the token endpoint flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authorization server answered, but the body carries no
    /// `access_token`. The raw body is kept for diagnostics.
    #[error("token endpoint returned no access token (status {status}): {body}")]
    TokenExchange { status: StatusCode, body: String },

    #[error("token endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Route-level errors with a fixed HTTP mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Callback invoked without the `code` query parameter.
    #[error("no authorization code in callback")]
    MissingCode,

    /// Token exchange rejected; `detail` is either the raw upstream body or
    /// an opaque message, depending on configuration.
    #[error("token exchange failed: {detail}")]
    TokenExchange { detail: String },

    /// JSON endpoint called without a stored session token.
    #[error("no access token in session")]
    Unauthenticated,

    /// A resource request the response cannot be built without failed.
    #[error("upstream resource request failed: {0}")]
    Downstream(#[from] reqwest::Error),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingCode => {
                (StatusCode::BAD_REQUEST, "No code provided.").into_response()
            }
            ApiError::TokenExchange { detail } => (
                StatusCode::BAD_REQUEST,
                format!("Error getting access token: {detail}"),
            )
                .into_response(),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "No access token. Please log in." })),
            )
                .into_response(),
            ApiError::Downstream(_) => (
                StatusCode::BAD_GATEWAY,
                "Upstream resource request failed.",
            )
                .into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
