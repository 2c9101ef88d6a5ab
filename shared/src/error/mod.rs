//! Unified error handling
//!
//! Error codes, categories, and the [`AppError`] type shared by every
//! planner subsystem. Subsystem errors (storage, seating) convert into
//! [`AppError`] at the facade boundary.

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
