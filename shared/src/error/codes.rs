//! Unified error codes for the wedding planner
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Seating errors
//! - 9xxx: System errors

use super::category::ErrorCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and stable reporting to UI adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 2xxx: Seating ====================
    /// Seating table not found
    TableNotFound = 2001,
    /// Guest party not found
    PartyNotFound = 2002,
    /// Assignment would exceed table capacity
    CapacityExceeded = 2003,

    // ==================== 9xxx: System ====================
    /// Persistent store failure
    PersistenceError = 9001,
    /// Serialization failure
    SerializationError = 9002,
    /// Internal error
    InternalError = 9003,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",
            ErrorCode::TableNotFound => "Seating table not found",
            ErrorCode::PartyNotFound => "Guest party not found",
            ErrorCode::CapacityExceeded => "Table capacity exceeded",
            ErrorCode::PersistenceError => "Persistent store failure",
            ErrorCode::SerializationError => "Serialization failure",
            ErrorCode::InternalError => "Internal error",
        }
    }

    /// Category of this code, used to pick a log level
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange => ErrorCategory::Validation,
            ErrorCode::NotFound | ErrorCode::TableNotFound | ErrorCode::PartyNotFound => {
                ErrorCategory::NotFound
            }
            ErrorCode::CapacityExceeded => ErrorCategory::Business,
            ErrorCode::Unknown
            | ErrorCode::PersistenceError
            | ErrorCode::SerializationError
            | ErrorCode::InternalError => ErrorCategory::System,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            5 => ErrorCode::InvalidRequest,
            7 => ErrorCode::RequiredField,
            8 => ErrorCode::ValueOutOfRange,
            2001 => ErrorCode::TableNotFound,
            2002 => ErrorCode::PartyNotFound,
            2003 => ErrorCode::CapacityExceeded,
            9001 => ErrorCode::PersistenceError,
            9002 => ErrorCode::SerializationError,
            9003 => ErrorCode::InternalError,
            other => return Err(format!("unknown error code: {}", other)),
        };
        Ok(code)
    }
}
