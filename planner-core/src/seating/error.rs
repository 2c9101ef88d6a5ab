//! Seating errors

use crate::storage::StorageError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Seating allocation errors
///
/// Everything except `Storage` is a recoverable rule violation; the chart
/// is left exactly as it was before the failing call. A `Storage` error
/// means the in-memory chart mutated but the save did not land (see
/// `SeatingManager`).
#[derive(Debug, Error)]
pub enum SeatingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("table not found: {0}")]
    TableNotFound(i64),

    #[error("party not found: {0}")]
    PartyNotFound(i64),

    #[error("table {table_id} is over capacity by {shortfall} seats")]
    CapacityExceeded { table_id: i64, shortfall: u32 },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type SeatingResult<T> = Result<T, SeatingError>;

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        match err {
            SeatingError::InvalidInput(msg) => AppError::validation(msg),
            SeatingError::TableNotFound(id) => {
                AppError::with_message(ErrorCode::TableNotFound, format!("table {} not found", id))
                    .with_detail("table_id", id)
            }
            SeatingError::PartyNotFound(id) => {
                AppError::with_message(ErrorCode::PartyNotFound, format!("party {} not found", id))
                    .with_detail("party_id", id)
            }
            SeatingError::CapacityExceeded {
                table_id,
                shortfall,
            } => AppError::with_message(
                ErrorCode::CapacityExceeded,
                format!("table {} is short {} seats", table_id, shortfall),
            )
            .with_detail("table_id", table_id)
            .with_detail("shortfall", shortfall),
            SeatingError::Storage(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_error_maps_to_code_with_details() {
        let err = SeatingError::CapacityExceeded {
            table_id: 7,
            shortfall: 3,
        };
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::CapacityExceeded);
        let details = app.details.unwrap();
        assert_eq!(details.get("table_id").unwrap(), 7);
        assert_eq!(details.get("shortfall").unwrap(), 3);
    }

    #[test]
    fn test_not_found_errors_map_to_codes() {
        let app: AppError = SeatingError::TableNotFound(1).into();
        assert_eq!(app.code, ErrorCode::TableNotFound);

        let app: AppError = SeatingError::PartyNotFound(2).into();
        assert_eq!(app.code, ErrorCode::PartyNotFound);

        let app: AppError = SeatingError::InvalidInput("empty name".to_string()).into();
        assert_eq!(app.code, ErrorCode::ValidationFailed);
    }
}
