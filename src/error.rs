//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

/// Startup misconfiguration. Never caught and retried: the binary exits.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("invalid row: {0}")]
    Decode(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Database creation at startup: either the URL is unusable or the server refused.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum BaasError {
    #[error("baas transport: {0}")]
    Http(#[from] reqwest::Error),
    #[error("baas returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Handler-boundary error. The public message is fixed per endpoint; the source is logged, never returned.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(&'static str),
    #[error("{message}: {source}")]
    Fetch {
        message: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("{message}: {source}")]
    Encode {
        message: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    pub fn fetch(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Fetch { message, source }
    }

    pub fn encode(message: &'static str) -> impl FnOnce(serde_json::Error) -> AppError {
        move |source| AppError::Encode { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, *message),
            AppError::Fetch { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
            AppError::Encode { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
