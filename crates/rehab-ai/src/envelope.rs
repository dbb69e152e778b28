//! Response envelope shared by every fallible workflow entry point.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const REQUEST_SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Errors that can be reported through a [`ServiceResponse`].
pub trait EnvelopeError: std::error::Error {
    /// Stable machine-readable code, e.g. `REPORT_EXPORT_ERROR`.
    fn code(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceError>,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ServiceResponse<T> {
    pub fn ok(prefix: &str, data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            request_id: generate_request_id(prefix),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(prefix: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ServiceError {
                code: code.to_string(),
                message: message.into(),
            }),
            request_id: generate_request_id(prefix),
            timestamp: Utc::now(),
        }
    }

    pub fn from_result<E: EnvelopeError>(prefix: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(prefix, data),
            Err(err) => {
                tracing::warn!(code = err.code(), error = %err, prefix, "workflow request failed");
                Self::failure(prefix, err.code(), err.to_string())
            }
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.code.as_str())
    }
}

/// `<prefix>-<epochMillis>-<random base36>`.
pub fn generate_request_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..REQUEST_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{prefix}-{millis}-{suffix}")
}
