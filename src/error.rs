//! Error types and handling for the `TravelAI` hotel front end

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main error type for the relay and the UI
#[derive(Error, Debug)]
pub enum TravelAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Inbound request body could not be understood
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Upstream could not be reached
    #[error("Network error: {message}")]
    Network { message: String },

    /// Upstream did not answer within the configured timeout
    #[error("Upstream timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status}")]
    Upstream { status: u16 },

    /// Upstream body is not JSON, or not the expected shape
    #[error("Invalid upstream response: {message}")]
    InvalidResponse { message: String },
}

/// Stable machine-readable error code sent to API callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Config,
    InvalidRequest,
    UpstreamUnreachable,
    UpstreamTimeout,
    UpstreamStatus,
    UpstreamInvalidResponse,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorCode,
    message: String,
}

impl TravelAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new invalid-response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            TravelAiError::Config { .. } => ErrorCode::Config,
            TravelAiError::Validation { .. } => ErrorCode::InvalidRequest,
            TravelAiError::Network { .. } => ErrorCode::UpstreamUnreachable,
            TravelAiError::Timeout { .. } => ErrorCode::UpstreamTimeout,
            TravelAiError::Upstream { .. } => ErrorCode::UpstreamStatus,
            TravelAiError::InvalidResponse { .. } => ErrorCode::UpstreamInvalidResponse,
        }
    }

    /// HTTP status the relay answers with for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            TravelAiError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            TravelAiError::Validation { .. } => StatusCode::BAD_REQUEST,
            TravelAiError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            TravelAiError::Network { .. }
            | TravelAiError::Upstream { .. }
            | TravelAiError::InvalidResponse { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get a user-friendly error message, in the language of the UI
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelAiError::Config { .. } => {
                "Сервіс налаштовано неправильно. Зверніться до адміністратора.".to_string()
            }
            TravelAiError::Validation { message } => {
                format!("Некоректний запит: {message}")
            }
            TravelAiError::Network { .. } => {
                "Не вдалося з'єднатися з сервісом пошуку. Спробуйте пізніше.".to_string()
            }
            TravelAiError::Timeout { .. } => {
                "Сервіс пошуку не відповів вчасно. Спробуйте ще раз.".to_string()
            }
            TravelAiError::Upstream { status } => {
                format!("Сервіс пошуку повернув помилку ({status}).")
            }
            TravelAiError::InvalidResponse { .. } => {
                "Сервіс пошуку повернув незрозумілу відповідь.".to_string()
            }
        }
    }
}

impl IntoResponse for TravelAiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.code(),
            message: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}
