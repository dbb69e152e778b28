use crate::config::ConfigError;
use crate::envelope::{EnvelopeError, ServiceResponse};
use crate::telemetry::TelemetryError;
use crate::workflows::eligibility::{self, ScreeningError};
use crate::workflows::matching::{self, MatchingError};
use crate::workflows::reporting::{export, ExportError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt;

const INTERNAL_ERROR_CODE: &str = "INTERNAL_ERROR";
pub const INVALID_PAYLOAD_CODE: &str = "INVALID_PAYLOAD";
const GENERIC_REQUEST_PREFIX: &str = "request";

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Screening(ScreeningError),
    Matching(MatchingError),
    Export(ExportError),
    Payload(serde_json::Error),
    /// A request body that never reached its workflow.
    Rejected {
        prefix: &'static str,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    pub fn rejected(prefix: &'static str, code: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            prefix,
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Screening(err) => err.code(),
            AppError::Matching(err) => err.code(),
            AppError::Export(err) => err.code(),
            AppError::Payload(_) => INVALID_PAYLOAD_CODE,
            AppError::Rejected { code, .. } => *code,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => INTERNAL_ERROR_CODE,
        }
    }

    /// Prefix for the request id of the error envelope.
    pub fn request_prefix(&self) -> &'static str {
        match self {
            AppError::Screening(_) => eligibility::REQUEST_PREFIX,
            AppError::Matching(_) => matching::REQUEST_PREFIX,
            AppError::Export(_) => export::REQUEST_PREFIX,
            AppError::Rejected { prefix, .. } => *prefix,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Payload(_) => GENERIC_REQUEST_PREFIX,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Screening(_)
            | AppError::Matching(_)
            | AppError::Export(ExportError::UnsupportedFormat(_))
            | AppError::Payload(_)
            | AppError::Rejected { .. } => StatusCode::BAD_REQUEST,
            AppError::Export(_)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Screening(err) => write!(f, "{}", err),
            AppError::Matching(err) => write!(f, "{}", err),
            AppError::Export(err) => write!(f, "{}", err),
            AppError::Payload(err) => write!(f, "payload could not be read: {}", err),
            AppError::Rejected { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Screening(err) => Some(err),
            AppError::Matching(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Payload(err) => Some(err),
            AppError::Rejected { .. } => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "request failed");
        } else {
            tracing::warn!(code = self.code(), error = %self, "request rejected");
        }
        let body: ServiceResponse<()> =
            ServiceResponse::failure(self.request_prefix(), self.code(), self.to_string());
        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ScreeningError> for AppError {
    fn from(value: ScreeningError) -> Self {
        Self::Screening(value)
    }
}

impl From<MatchingError> for AppError {
    fn from(value: MatchingError) -> Self {
        Self::Matching(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}
