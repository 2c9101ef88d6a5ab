//! Planning timeline
//!
//! Milestones ordered by date for the countdown view. Listing sorts by
//! date, ties broken by creation order.

use crate::storage::PlannerStorage;
use shared::error::{AppError, AppResult};
use shared::models::{TimelineEvent, TimelineEventCreate, TimelineEventUpdate};
use shared::util::snowflake_id;
use tracing::info;

pub struct Timeline {
    storage: PlannerStorage,
}

impl Timeline {
    pub fn new(storage: PlannerStorage) -> Self {
        Self { storage }
    }

    pub fn add(&self, create: TimelineEventCreate) -> AppResult<TimelineEvent> {
        let title = create.title.trim();
        if title.is_empty() {
            return Err(AppError::required("title"));
        }

        let event = TimelineEvent {
            id: snowflake_id(),
            date: create.date,
            title: title.to_string(),
            description: create.description.trim().to_string(),
            status: create.status,
        };
        self.storage.upsert_timeline_event(&event)?;
        info!(event_id = event.id, date = %event.date, "timeline event added");
        Ok(event)
    }

    pub fn update(&self, id: i64, update: TimelineEventUpdate) -> AppResult<TimelineEvent> {
        let mut event = self.get(id)?;

        if let Some(date) = update.date {
            event.date = date;
        }
        if let Some(title) = update.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(AppError::required("title"));
            }
            event.title = title;
        }
        if let Some(description) = update.description {
            event.description = description.trim().to_string();
        }
        if let Some(status) = update.status {
            event.status = status;
        }

        self.storage.upsert_timeline_event(&event)?;
        Ok(event)
    }

    pub fn remove(&self, id: i64) -> AppResult<()> {
        if !self.storage.remove_timeline_event(id)? {
            return Err(AppError::not_found("timeline event").with_detail("event_id", id));
        }
        Ok(())
    }

    pub fn get(&self, id: i64) -> AppResult<TimelineEvent> {
        self.storage
            .get_timeline_event(id)?
            .ok_or_else(|| AppError::not_found("timeline event").with_detail("event_id", id))
    }

    /// Events sorted by date, then by creation order
    pub fn list(&self) -> AppResult<Vec<TimelineEvent>> {
        let mut events = self.storage.list_timeline_events()?;
        events.sort_by_key(|e| (e.date, e.id));
        Ok(events)
    }
}
