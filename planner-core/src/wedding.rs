//! Wedding profile
//!
//! The single record of core wedding facts. Reads always succeed; an
//! empty store yields the default record.

use crate::storage::PlannerStorage;
use chrono::NaiveDate;
use shared::error::{AppError, AppResult};
use shared::models::WeddingDetails;
use tracing::info;

pub struct WeddingProfile {
    storage: PlannerStorage,
}

impl WeddingProfile {
    pub fn new(storage: PlannerStorage) -> Self {
        Self { storage }
    }

    pub fn details(&self) -> AppResult<WeddingDetails> {
        Ok(self.storage.wedding_details()?)
    }

    pub fn set_details(&self, details: WeddingDetails) -> AppResult<WeddingDetails> {
        if details.estimated_guests == 0
            && details.groom_name.trim().is_empty()
            && details.bride_name.trim().is_empty()
        {
            return Err(AppError::validation(
                "at least one of the couple's names or an estimated guest count is required",
            ));
        }

        let details = WeddingDetails {
            groom_name: details.groom_name.trim().to_string(),
            bride_name: details.bride_name.trim().to_string(),
            date: details.date,
            venue: details.venue.trim().to_string(),
            estimated_guests: details.estimated_guests,
        };
        self.storage.set_wedding_details(&details)?;
        info!(date = ?details.date, "wedding details updated");
        Ok(details)
    }

    /// Days from `today` to the wedding date; `None` when no date is set,
    /// negative once the date has passed
    pub fn days_until(&self, today: NaiveDate) -> AppResult<Option<i64>> {
        Ok(self
            .details()?
            .date
            .map(|date| (date - today).num_days()))
    }
}
