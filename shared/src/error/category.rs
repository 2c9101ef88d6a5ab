//! Error categories for logging and reporting

use serde::{Deserialize, Serialize};

/// Coarse classification of an [`super::ErrorCode`]
///
/// Everything except `System` is an expected, recoverable outcome of a
/// user-driven operation and is logged at a low level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Bad arguments to an operation
    Validation,
    /// A referenced entity does not exist
    NotFound,
    /// A domain rule rejected the operation (e.g. table capacity)
    Business,
    /// Persistence or internal failure
    System,
}

impl ErrorCategory {
    /// Whether errors of this category are an expected part of normal use
    pub fn is_expected(&self) -> bool {
        !matches!(self, ErrorCategory::System)
    }
}
