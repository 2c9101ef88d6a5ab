//! Guest directory
//!
//! CRUD over the guest list. One entry is one invited party;
//! `invited_count` is the number of seats the party takes when seated
//! together. Deleting a guest never touches the seating chart; a stale
//! seated id is tolerated and filtered on display.

use crate::storage::PlannerStorage;
use shared::error::{AppError, AppResult};
use shared::models::{Guest, GuestCreate, GuestRelation, GuestUpdate, RsvpStatus};
use shared::util::snowflake_id;
use tracing::info;

pub struct GuestDirectory {
    storage: PlannerStorage,
}

impl GuestDirectory {
    pub fn new(storage: PlannerStorage) -> Self {
        Self { storage }
    }

    pub fn add(&self, create: GuestCreate) -> AppResult<Guest> {
        let full_name = create.full_name.trim();
        if full_name.is_empty() {
            return Err(AppError::required("full_name"));
        }
        if create.invited_count == 0 {
            return Err(AppError::out_of_range(
                "invited_count",
                "invited_count must be at least 1",
            ));
        }

        let guest = Guest {
            id: snowflake_id(),
            full_name: full_name.to_string(),
            phone_number: create.phone_number.trim().to_string(),
            relation: create.relation,
            invited_count: create.invited_count,
            rsvp: create.rsvp,
            special_notes: create.special_notes,
        };
        self.storage.upsert_guest(&guest)?;
        info!(guest_id = guest.id, invited = guest.invited_count, "guest added");
        Ok(guest)
    }

    pub fn update(&self, id: i64, update: GuestUpdate) -> AppResult<Guest> {
        let mut guest = self.get(id)?;

        if let Some(full_name) = update.full_name {
            let full_name = full_name.trim().to_string();
            if full_name.is_empty() {
                return Err(AppError::required("full_name"));
            }
            guest.full_name = full_name;
        }
        if let Some(phone_number) = update.phone_number {
            guest.phone_number = phone_number.trim().to_string();
        }
        if let Some(relation) = update.relation {
            guest.relation = relation;
        }
        if let Some(invited_count) = update.invited_count {
            if invited_count == 0 {
                return Err(AppError::out_of_range(
                    "invited_count",
                    "invited_count must be at least 1",
                ));
            }
            guest.invited_count = invited_count;
        }
        if let Some(rsvp) = update.rsvp {
            guest.rsvp = rsvp;
        }
        if let Some(special_notes) = update.special_notes {
            guest.special_notes = special_notes;
        }

        self.storage.upsert_guest(&guest)?;
        Ok(guest)
    }

    pub fn remove(&self, id: i64) -> AppResult<()> {
        if !self.storage.remove_guest(id)? {
            return Err(AppError::not_found("guest").with_detail("guest_id", id));
        }
        info!(guest_id = id, "guest removed");
        Ok(())
    }

    pub fn get(&self, id: i64) -> AppResult<Guest> {
        self.storage
            .get_guest(id)?
            .ok_or_else(|| AppError::not_found("guest").with_detail("guest_id", id))
    }

    /// All guests in insertion order
    pub fn list(&self) -> AppResult<Vec<Guest>> {
        Ok(self.storage.list_guests()?)
    }

    /// Case-insensitive substring match on name or phone number
    pub fn search(&self, term: &str) -> AppResult<Vec<Guest>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.list();
        }
        Ok(self
            .list()?
            .into_iter()
            .filter(|g| {
                g.full_name.to_lowercase().contains(&needle) || g.phone_number.contains(&needle)
            })
            .collect())
    }

    pub fn by_relation(&self, relation: GuestRelation) -> AppResult<Vec<Guest>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|g| g.relation == relation)
            .collect())
    }

    /// Total people invited across all parties
    pub fn total_invited(&self) -> AppResult<u32> {
        Ok(self.list()?.iter().map(|g| g.invited_count).sum())
    }

    /// People in parties that confirmed attendance
    pub fn confirmed_invited(&self) -> AppResult<u32> {
        Ok(self
            .list()?
            .iter()
            .filter(|g| g.rsvp == RsvpStatus::Confirmed)
            .map(|g| g.invited_count)
            .sum())
    }
}
