//! Shared types for the wedding planner core
//!
//! Domain models, unified error codes, response-agnostic error types, and
//! small utilities used by the planner engine.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
