//! Seating Table Model

use serde::{Deserialize, Serialize};

/// Seating table entity
///
/// `assigned_party_ids` is the ordered list of guest ids seated here.
/// Capacity is fixed at creation. A stale id (guest since deleted from
/// the directory) may linger in the list; it is tolerated and counts as
/// zero seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingTable {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub assigned_party_ids: Vec<i64>,
}
