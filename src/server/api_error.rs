use std::fmt::Display;

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;

use super::error_mapping::ToStructuredError;
use crate::logging::get_log_file_path;

/// Error taxonomy exposed at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced id is absent.
    NotFound,
    /// Malformed index, position or payload.
    InvalidArgument,
}

impl ErrorKind {
    /// Both kinds are client mistakes and answer `400`.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NotFound | Self::InvalidArgument => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub logs: String,
}

/// A rejected request: short stable message plus machine code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            code: "INVALID_ARGUMENT",
            message: message.into(),
        }
    }

    /// Convert a domain error using its stable code.
    #[must_use]
    pub fn from_domain<E: ToStructuredError + Display>(err: &E) -> Self {
        let (code, kind) = err.error_code_and_kind();
        Self {
            kind,
            code,
            message: err.to_string(),
        }
    }

    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.message.clone(),
            code: self.code.to_string(),
            logs: get_log_file_path().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.kind.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reorder::ReorderError;

    #[test]
    fn test_from_domain_keeps_stable_message() {
        let err = ApiError::from_domain(&ReorderError::MovedItemNotFound);
        assert_eq!(err.message, "Moved item not found");
        assert_eq!(err.code, "MOVED_ITEM_NOT_FOUND");
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_invalid_indices_message() {
        let err = ApiError::from_domain(&ReorderError::InvalidIndices {
            from: Some(9),
            to: Some(0),
            len: 2,
        });
        assert_eq!(err.message, "Invalid indices");
    }

    #[test]
    fn test_body_json_format() {
        let body = ApiError::invalid_argument("Malformed JSON body").body();
        let parsed = serde_json::to_value(&body).unwrap();
        assert_eq!(parsed["error"], "Malformed JSON body");
        assert_eq!(parsed["code"], "INVALID_ARGUMENT");
        // Log path is unset in unit tests, so it is omitted
        assert!(parsed.get("logs").is_none());
    }

    #[test]
    fn test_status_is_bad_request() {
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::InvalidArgument.status(), StatusCode::BAD_REQUEST);
    }
}
