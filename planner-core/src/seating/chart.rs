//! Seating chart state and rules
//!
//! Pure module: no storage, no clock beyond id generation. Invariants
//! maintained across every operation:
//!
//! - a table's occupancy (sum of seated party sizes) never exceeds its
//!   capacity; the boundary is inclusive, occupancy == capacity is legal
//! - a party id appears in at most one table's list
//! - a rejected operation leaves the chart untouched
//!
//! Stale party ids (guest deleted from the directory after being seated)
//! are tolerated: they count as zero seats and are skipped on display.

use super::error::{SeatingError, SeatingResult};
use shared::models::{Guest, SeatingTable};
use shared::util::snowflake_id;

/// A guest party as the allocator sees it: an id and a seat count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestParty {
    pub id: i64,
    pub size: u32,
}

/// Read-only view of the guest directory, in directory (insertion) order
#[derive(Debug, Clone, Default)]
pub struct PartyRoster {
    parties: Vec<GuestParty>,
}

impl PartyRoster {
    pub fn new(parties: Vec<GuestParty>) -> Self {
        Self { parties }
    }

    /// Build a roster from guest records; `invited_count` is the party size
    pub fn from_guests(guests: &[Guest]) -> Self {
        Self {
            parties: guests
                .iter()
                .map(|g| GuestParty {
                    id: g.id,
                    size: g.invited_count,
                })
                .collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&GuestParty> {
        self.parties.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuestParty> {
        self.parties.iter()
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }
}

/// The set of seating tables and their party assignments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatingChart {
    tables: Vec<SeatingTable>,
}

impl SeatingChart {
    pub fn new(tables: Vec<SeatingTable>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &[SeatingTable] {
        &self.tables
    }

    pub fn table(&self, table_id: i64) -> Option<&SeatingTable> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// Create a table with a fresh id and an empty assignment list
    pub fn create_table(&mut self, name: &str, capacity: u32) -> SeatingResult<SeatingTable> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SeatingError::InvalidInput(
                "table name must not be empty".to_string(),
            ));
        }
        if capacity == 0 {
            return Err(SeatingError::InvalidInput(
                "table capacity must be at least 1".to_string(),
            ));
        }
        let table = SeatingTable {
            id: snowflake_id(),
            name: name.to_string(),
            capacity,
            assigned_party_ids: Vec::new(),
        };
        self.tables.push(table.clone());
        Ok(table)
    }

    /// Remove a table; its parties return to the unassigned pool.
    /// Returns the freed party ids.
    pub fn remove_table(&mut self, table_id: i64) -> SeatingResult<Vec<i64>> {
        let idx = self
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or(SeatingError::TableNotFound(table_id))?;
        let table = self.tables.remove(idx);
        Ok(table.assigned_party_ids)
    }

    /// Seats taken at a table, recomputed from the assignment list on
    /// every call. Stale ids contribute zero.
    pub fn occupancy(&self, roster: &PartyRoster, table_id: i64) -> SeatingResult<u32> {
        let table = self
            .table(table_id)
            .ok_or(SeatingError::TableNotFound(table_id))?;
        Ok(Self::seated_count(table, roster))
    }

    fn seated_count(table: &SeatingTable, roster: &PartyRoster) -> u32 {
        table
            .assigned_party_ids
            .iter()
            .filter_map(|id| roster.get(*id))
            .map(|p| p.size)
            .sum()
    }

    /// The table currently holding a party, if any
    pub fn table_of(&self, party_id: i64) -> Option<i64> {
        self.tables
            .iter()
            .find(|t| t.assigned_party_ids.contains(&party_id))
            .map(|t| t.id)
    }

    /// Move a party: off its current table (if any), then onto `target`.
    ///
    /// `target = None` is a pure removal and succeeds for any known
    /// party, including one already unassigned. The capacity check runs
    /// before any mutation, so a rejected move leaves the chart exactly
    /// as it was. Moving a party within its own table counts its seats
    /// out first.
    pub fn assign_party(
        &mut self,
        roster: &PartyRoster,
        party_id: i64,
        target: Option<i64>,
    ) -> SeatingResult<()> {
        let party = *roster
            .get(party_id)
            .ok_or(SeatingError::PartyNotFound(party_id))?;

        if let Some(table_id) = target {
            let table = self
                .table(table_id)
                .ok_or(SeatingError::TableNotFound(table_id))?;
            let mut occupied = Self::seated_count(table, roster);
            if table.assigned_party_ids.contains(&party_id) {
                occupied -= party.size;
            }
            // widened so occupied + size cannot wrap near u32::MAX
            let projected = u64::from(occupied) + u64::from(party.size);
            if projected > u64::from(table.capacity) {
                return Err(SeatingError::CapacityExceeded {
                    table_id,
                    shortfall: (projected - u64::from(table.capacity)) as u32,
                });
            }
        }

        self.detach(party_id);
        if let Some(table_id) = target {
            let table = self
                .tables
                .iter_mut()
                .find(|t| t.id == table_id)
                .ok_or(SeatingError::TableNotFound(table_id))?;
            table.assigned_party_ids.push(party_id);
        }
        Ok(())
    }

    fn detach(&mut self, party_id: i64) {
        for table in &mut self.tables {
            table.assigned_party_ids.retain(|id| *id != party_id);
        }
    }

    /// Parties not seated at any table, in roster order
    pub fn unassigned<'a>(&self, roster: &'a PartyRoster) -> Vec<&'a GuestParty> {
        roster
            .iter()
            .filter(|p| self.table_of(p.id).is_none())
            .collect()
    }

    /// Number of seated parties across all tables
    pub fn seated_party_count(&self) -> usize {
        self.tables.iter().map(|t| t.assigned_party_ids.len()).sum()
    }
}
