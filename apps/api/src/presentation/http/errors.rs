//! HTTP error handling and response conversion.
//!
//! Every failure leaves the service as a JSON object of the shape `{ "error": ..., "details"?: ... }`.
//! Cross-origin headers are added by the router's outer layers, so error responses carry them too.

use crate::domain::likes::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

pub const ITEM_ID_REQUIRED: &str = "itemId required";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

/// Error payload returned to the browser client.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub details: Option<String>,
}

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Caller input missing or malformed (400).
    InvalidRequest(String),

    /// HTTP method not served by the endpoint (405).
    MethodNotSupported(String),

    /// No route for the path (404).
    NotFound(String),

    /// The item store failed or rejected the call (502).
    Upstream {
        status: Option<u16>,
        details: String,
    },

    /// Anything unexpected (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            Self::MethodNotSupported(method) => write!(f, "Method not supported: {}", method),
            Self::NotFound(path) => write!(f, "Not found: {}", path),
            Self::Upstream {
                status: Some(status),
                details,
            } => write!(f, "Upstream error ({}): {}", status, details),
            Self::Upstream {
                status: None,
                details,
            } => write!(f, "Upstream error: {}", details),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotSupported(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            Self::InvalidRequest(msg) => (msg.clone(), None),
            Self::MethodNotSupported(_) => ("Method not allowed".to_string(), None),
            Self::NotFound(_) => ("Not found".to_string(), None),
            Self::Upstream { details, .. } => {
                ("Upstream service error".to_string(), Some(details.clone()))
            }
            Self::Internal(msg) => ("Internal server error".to_string(), Some(msg.clone())),
        };
        ErrorBody { error, details }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::BAD_GATEWAY => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::METHOD_NOT_ALLOWED => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(self.body())).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(_) => AppError::InvalidRequest(ITEM_ID_REQUIRED.into()),
            DomainError::UpstreamRead { status } => AppError::Upstream {
                status: Some(status),
                details: format!("Webflow API error: {}", status),
            },
            DomainError::UpstreamWrite { status, body } => AppError::Upstream {
                status: Some(status),
                details: format!("Webflow update error: {} - {}", status, body),
            },
            DomainError::UpstreamUnavailable(msg) => AppError::Upstream {
                status: None,
                details: msg,
            },
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Internal(msg)
            }
        }
    }
}
