//! Numeric error codes attached to error logs.
//!
//! Clients only see the envelope message; the code goes to the `error_code`
//! field of the log event so failures can be grouped in log search.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    ValidationError,
    InvalidUuid,
    JsonExtraction,
    QueryExtraction,
    NotFound,
    BadRequest,

    // Server errors
    InternalError,
    ServiceUnavailable,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::QueryExtraction => "QUERY_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    pub const fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,
            Self::QueryExtraction => 1007,
            Self::ServiceUnavailable => 1011,
        }
    }

    /// Message sent to clients when the error carries none of its own
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError | Self::InvalidUuid => "Validation error",
            Self::JsonExtraction => "Invalid JSON body",
            Self::QueryExtraction => "Invalid query string",
            Self::NotFound => "Not found",
            Self::BadRequest => "Bad request",
            Self::InternalError => "Internal server error",
            Self::ServiceUnavailable => "Service unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
