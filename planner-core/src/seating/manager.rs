//! Seating manager
//!
//! Owns the [`SeatingChart`] for one planner session and keeps it in
//! sync with the store: the chart is loaded once at open, every mutating
//! operation runs chart-mutation-then-save.
//!
//! Known limitation: if the save fails the in-memory chart keeps the new
//! state and the store lags behind until the next successful save. The
//! error is surfaced to the caller either way; mirroring the mutation
//! back out is deliberately not attempted.
//!
//! Party sizes are read from the guest directory fresh on every call, so
//! occupancy never drifts after a guest is edited or deleted elsewhere.

use super::chart::{PartyRoster, SeatingChart};
use super::error::{SeatingError, SeatingResult};
use crate::storage::PlannerStorage;
use shared::models::{Guest, SeatingTable};
use tracing::{debug, info};

pub struct SeatingManager {
    storage: PlannerStorage,
    chart: SeatingChart,
}

impl SeatingManager {
    /// Load the chart from the store
    pub fn open(storage: PlannerStorage) -> SeatingResult<Self> {
        let chart = SeatingChart::new(storage.load_chart()?);
        debug!(tables = chart.tables().len(), "seating chart loaded");
        Ok(Self { storage, chart })
    }

    fn roster(&self) -> SeatingResult<PartyRoster> {
        Ok(PartyRoster::from_guests(&self.storage.list_guests()?))
    }

    fn persist(&self) -> SeatingResult<()> {
        self.storage.save_chart(self.chart.tables())?;
        Ok(())
    }

    pub fn tables(&self) -> &[SeatingTable] {
        self.chart.tables()
    }

    /// Create a table and persist the chart
    pub fn create_table(&mut self, name: &str, capacity: u32) -> SeatingResult<SeatingTable> {
        let table = self.chart.create_table(name, capacity)?;
        self.persist()?;
        info!(table_id = table.id, name = %table.name, capacity, "seating table created");
        Ok(table)
    }

    /// Remove a table; its parties return to the unassigned pool.
    /// Returns the freed party ids.
    pub fn remove_table(&mut self, table_id: i64) -> SeatingResult<Vec<i64>> {
        let freed = self.chart.remove_table(table_id)?;
        self.persist()?;
        info!(table_id, freed_parties = freed.len(), "seating table removed");
        Ok(freed)
    }

    /// Move a party onto a table, or off every table with `target = None`
    pub fn assign_party(&mut self, party_id: i64, target: Option<i64>) -> SeatingResult<()> {
        let roster = self.roster()?;
        self.chart.assign_party(&roster, party_id, target)?;
        self.persist()?;
        debug!(party_id, target_table = ?target, "party assignment updated");
        Ok(())
    }

    /// Seats taken at a table right now
    pub fn occupancy(&self, table_id: i64) -> SeatingResult<u32> {
        let roster = self.roster()?;
        self.chart.occupancy(&roster, table_id)
    }

    /// Guests not seated at any table, in directory order
    pub fn unassigned_parties(&self) -> SeatingResult<Vec<Guest>> {
        let guests = self.storage.list_guests()?;
        Ok(guests
            .into_iter()
            .filter(|g| self.chart.table_of(g.id).is_none())
            .collect())
    }

    /// Guest records seated at a table, in seating order; stale ids are
    /// skipped
    pub fn seated_guests(&self, table_id: i64) -> SeatingResult<Vec<Guest>> {
        let table = self
            .chart
            .table(table_id)
            .ok_or(SeatingError::TableNotFound(table_id))?;
        let mut guests = Vec::with_capacity(table.assigned_party_ids.len());
        for id in &table.assigned_party_ids {
            if let Some(guest) = self.storage.get_guest(*id)? {
                guests.push(guest);
            }
        }
        Ok(guests)
    }

    /// Tables that can still take the given party, for assignment pickers
    pub fn tables_with_room(&self, party_id: i64) -> SeatingResult<Vec<SeatingTable>> {
        let roster = self.roster()?;
        let party = *roster
            .get(party_id)
            .ok_or(SeatingError::PartyNotFound(party_id))?;

        let mut out = Vec::new();
        for table in self.chart.tables() {
            let mut occupied = self.chart.occupancy(&roster, table.id)?;
            if table.assigned_party_ids.contains(&party_id) {
                occupied -= party.size;
            }
            if u64::from(occupied) + u64::from(party.size) <= u64::from(table.capacity) {
                out.push(table.clone());
            }
        }
        Ok(out)
    }

    /// Number of seated parties across all tables
    pub fn seated_party_count(&self) -> usize {
        self.chart.seated_party_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{GuestRelation, RsvpStatus};

    fn seed_guest(storage: &PlannerStorage, id: i64, name: &str, invited: u32) {
        storage
            .upsert_guest(&Guest {
                id,
                full_name: name.to_string(),
                phone_number: String::new(),
                relation: GuestRelation::Friends,
                invited_count: invited,
                rsvp: RsvpStatus::Confirmed,
                special_notes: String::new(),
            })
            .unwrap();
    }

    fn manager_with_guests(guests: &[(i64, &str, u32)]) -> (PlannerStorage, SeatingManager) {
        let storage = PlannerStorage::open_in_memory().unwrap();
        for &(id, name, invited) in guests {
            seed_guest(&storage, id, name, invited);
        }
        let manager = SeatingManager::open(storage.clone()).unwrap();
        (storage, manager)
    }

    #[test]
    fn test_mutations_are_persisted_across_reopen() {
        let (storage, mut manager) = manager_with_guests(&[(1, "Noa", 4), (2, "Avi", 2)]);

        let table = manager.create_table("Family", 8).unwrap();
        manager.assign_party(1, Some(table.id)).unwrap();
        manager.assign_party(2, Some(table.id)).unwrap();

        // a fresh manager over the same store sees the saved chart
        let reopened = SeatingManager::open(storage).unwrap();
        assert_eq!(reopened.tables().len(), 1);
        assert_eq!(reopened.occupancy(table.id).unwrap(), 6);
        assert!(reopened.unassigned_parties().unwrap().is_empty());
    }

    #[test]
    fn test_rejected_assignment_not_persisted() {
        let (storage, mut manager) = manager_with_guests(&[(1, "Noa", 4), (2, "Avi", 6)]);
        let table = manager.create_table("Small", 8).unwrap();
        manager.assign_party(1, Some(table.id)).unwrap();

        let err = manager.assign_party(2, Some(table.id)).unwrap_err();
        assert!(matches!(err, SeatingError::CapacityExceeded { .. }));

        let saved = storage.load_chart().unwrap();
        assert_eq!(saved[0].assigned_party_ids, vec![1]);
    }

    #[test]
    fn test_occupancy_tracks_guest_edits() {
        let (storage, mut manager) = manager_with_guests(&[(1, "Noa", 4)]);
        let table = manager.create_table("T", 8).unwrap();
        manager.assign_party(1, Some(table.id)).unwrap();
        assert_eq!(manager.occupancy(table.id).unwrap(), 4);

        // the party grows from 4 to 6 in the directory; occupancy is
        // recomputed, not cached
        let mut guest = storage.get_guest(1).unwrap().unwrap();
        guest.invited_count = 6;
        storage.upsert_guest(&guest).unwrap();
        assert_eq!(manager.occupancy(table.id).unwrap(), 6);

        // deleting the guest leaves a tolerated stale id
        storage.remove_guest(1).unwrap();
        assert_eq!(manager.occupancy(table.id).unwrap(), 0);
        assert!(manager.seated_guests(table.id).unwrap().is_empty());
        assert_eq!(manager.tables()[0].assigned_party_ids, vec![1]);
    }

    #[test]
    fn test_unassigned_parties_in_directory_order() {
        let (_storage, mut manager) =
            manager_with_guests(&[(1, "A", 1), (2, "B", 2), (3, "C", 3)]);
        let table = manager.create_table("T", 4).unwrap();
        manager.assign_party(2, Some(table.id)).unwrap();

        let names: Vec<String> = manager
            .unassigned_parties()
            .unwrap()
            .into_iter()
            .map(|g| g.full_name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_tables_with_room_filters_full_tables() {
        let (_storage, mut manager) = manager_with_guests(&[(1, "A", 4), (2, "B", 3)]);
        let t1 = manager.create_table("T1", 4).unwrap();
        let t2 = manager.create_table("T2", 6).unwrap();
        manager.assign_party(1, Some(t1.id)).unwrap();

        // party 2 (3 seats) only fits on T2
        let room: Vec<i64> = manager
            .tables_with_room(2)
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(room, vec![t2.id]);

        // party 1 fits where it already sits (its own seats count out)
        // and on T2
        let room: Vec<i64> = manager
            .tables_with_room(1)
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(room, vec![t1.id, t2.id]);
    }

    #[test]
    fn test_tables_with_room_handles_full_u32_max_table() {
        let (_storage, mut manager) =
            manager_with_guests(&[(1, "A", u32::MAX), (2, "B", 2)]);
        let full = manager.create_table("Hall", u32::MAX).unwrap();
        let spare = manager.create_table("Annex", 4).unwrap();
        manager.assign_party(1, Some(full.id)).unwrap();

        // the filter must not wrap when projecting onto the full table
        let room: Vec<i64> = manager
            .tables_with_room(2)
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(room, vec![spare.id]);
    }

    #[test]
    fn test_remove_table_returns_parties_to_pool() {
        let (_storage, mut manager) = manager_with_guests(&[(1, "A", 2), (2, "B", 2)]);
        let table = manager.create_table("T", 4).unwrap();
        manager.assign_party(1, Some(table.id)).unwrap();
        manager.assign_party(2, Some(table.id)).unwrap();

        let freed = manager.remove_table(table.id).unwrap();
        assert_eq!(freed, vec![1, 2]);
        assert!(manager.tables().is_empty());
        assert_eq!(manager.unassigned_parties().unwrap().len(), 2);
    }
}
