//! API Errors
//!
//! Every failure a request can hit, and how it is rendered on the wire. All
//! variants produce a `{"error": <message>}` JSON body.

use crate::app::response::JsonBody;

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Empty request body")]
    EmptyBody,

    #[error("Invalid JSON format")]
    InvalidFormat,

    #[error("Location and ReviewBody are required fields")]
    MissingField,

    #[error("Invalid {param} '{value}', expected YYYY-MM-DD")]
    InvalidDate { param: &'static str, value: String },

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(Method),

    #[error("Stored review has a malformed timestamp: '{0}'")]
    CorruptTimestamp(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyBody
            | ApiError::InvalidFormat
            | ApiError::MissingField
            | ApiError::InvalidDate { .. }
            | ApiError::InvalidQuery(_)
            | ApiError::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
            ApiError::CorruptTimestamp(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        JsonBody(
            status,
            ErrorResponse {
                error: self.to_string(),
            },
        )
        .into_response()
    }
}
