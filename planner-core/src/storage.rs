//! redb-based storage layer for the planner
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `guests` | `i64` | `Guest` | Guest directory |
//! | `budget_items` | `i64` | `BudgetItem` | Budget lines |
//! | `vendors` | `i64` | `Vendor` | Vendor book |
//! | `tasks` | `i64` | `Task` | Task board |
//! | `timeline_events` | `i64` | `TimelineEvent` | Timeline |
//! | `seating_chart` | `"chart"` | `Vec<SeatingTable>` | Whole seating chart |
//! | `wedding_details` | `"details"` | `WeddingDetails` | Onboarding facts |
//!
//! Values are JSON-serialized. Entity keys are snowflake ids, so iterating
//! a table in key order yields entries in creation order. This is what
//! gives the guest directory its stable "natural" ordering.
//!
//! The seating chart is a single blob saved in one commit, so a save is
//! all-or-nothing: a reader never observes a half-written table list.

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use shared::models::{BudgetItem, Guest, SeatingTable, Task, TimelineEvent, Vendor, WeddingDetails};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

const GUESTS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("guests");
const BUDGET_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("budget_items");
const VENDORS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("vendors");
const TASKS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("tasks");
const TIMELINE_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("timeline_events");

/// Whole seating chart under a single key, saved atomically
const CHART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("seating_chart");
const DETAILS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("wedding_details");

const CHART_KEY: &str = "chart";
const DETAILS_KEY: &str = "details";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "storage operation failed");
        match err {
            StorageError::Serialization(e) => {
                AppError::with_message(ErrorCode::SerializationError, e.to_string())
            }
            other => AppError::with_message(ErrorCode::PersistenceError, other.to_string()),
        }
    }
}

/// Planner storage backed by redb
///
/// Cheap to clone; every clone shares the same database handle. redb
/// commits with immediate durability, so a returned `Ok` means the data
/// survives a crash.
#[derive(Clone)]
pub struct PlannerStorage {
    db: Arc<Database>,
}

impl PlannerStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    fn init_tables(&self) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let _ = txn.open_table(GUESTS_TABLE)?;
            let _ = txn.open_table(BUDGET_TABLE)?;
            let _ = txn.open_table(VENDORS_TABLE)?;
            let _ = txn.open_table(TASKS_TABLE)?;
            let _ = txn.open_table(TIMELINE_TABLE)?;
            let _ = txn.open_table(CHART_TABLE)?;
            let _ = txn.open_table(DETAILS_TABLE)?;
        }
        txn.commit()?;
        Ok(())
    }

    // ========== Generic JSON helpers ==========

    fn put_json<T: Serialize>(
        &self,
        table: TableDefinition<i64, &'static [u8]>,
        id: i64,
        value: &T,
    ) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut t = txn.open_table(table)?;
            let bytes = serde_json::to_vec(value)?;
            t.insert(id, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        table: TableDefinition<i64, &'static [u8]>,
        id: i64,
    ) -> StorageResult<Option<T>> {
        let txn = self.db.begin_read()?;
        let t = txn.open_table(table)?;
        match t.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Returns whether an entry was actually removed
    fn remove_entry(
        &self,
        table: TableDefinition<i64, &'static [u8]>,
        id: i64,
    ) -> StorageResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut t = txn.open_table(table)?;
            t.remove(id)?.is_some()
        };
        txn.commit()?;
        Ok(removed)
    }

    /// List all entries in ascending key order (= creation order)
    fn list_json<T: DeserializeOwned>(
        &self,
        table: TableDefinition<i64, &'static [u8]>,
    ) -> StorageResult<Vec<T>> {
        let txn = self.db.begin_read()?;
        let t = txn.open_table(table)?;
        let mut entries = Vec::new();
        for result in t.iter()? {
            let (_key, value) = result?;
            entries.push(serde_json::from_slice(value.value())?);
        }
        Ok(entries)
    }

    // ========== Guests ==========

    pub fn upsert_guest(&self, guest: &Guest) -> StorageResult<()> {
        self.put_json(GUESTS_TABLE, guest.id, guest)
    }

    pub fn get_guest(&self, id: i64) -> StorageResult<Option<Guest>> {
        self.get_json(GUESTS_TABLE, id)
    }

    pub fn remove_guest(&self, id: i64) -> StorageResult<bool> {
        self.remove_entry(GUESTS_TABLE, id)
    }

    pub fn list_guests(&self) -> StorageResult<Vec<Guest>> {
        self.list_json(GUESTS_TABLE)
    }

    // ========== Budget items ==========

    pub fn upsert_budget_item(&self, item: &BudgetItem) -> StorageResult<()> {
        self.put_json(BUDGET_TABLE, item.id, item)
    }

    pub fn get_budget_item(&self, id: i64) -> StorageResult<Option<BudgetItem>> {
        self.get_json(BUDGET_TABLE, id)
    }

    pub fn remove_budget_item(&self, id: i64) -> StorageResult<bool> {
        self.remove_entry(BUDGET_TABLE, id)
    }

    pub fn list_budget_items(&self) -> StorageResult<Vec<BudgetItem>> {
        self.list_json(BUDGET_TABLE)
    }

    // ========== Vendors ==========

    pub fn upsert_vendor(&self, vendor: &Vendor) -> StorageResult<()> {
        self.put_json(VENDORS_TABLE, vendor.id, vendor)
    }

    pub fn get_vendor(&self, id: i64) -> StorageResult<Option<Vendor>> {
        self.get_json(VENDORS_TABLE, id)
    }

    pub fn remove_vendor(&self, id: i64) -> StorageResult<bool> {
        self.remove_entry(VENDORS_TABLE, id)
    }

    pub fn list_vendors(&self) -> StorageResult<Vec<Vendor>> {
        self.list_json(VENDORS_TABLE)
    }

    // ========== Tasks ==========

    pub fn upsert_task(&self, task: &Task) -> StorageResult<()> {
        self.put_json(TASKS_TABLE, task.id, task)
    }

    pub fn get_task(&self, id: i64) -> StorageResult<Option<Task>> {
        self.get_json(TASKS_TABLE, id)
    }

    pub fn remove_task(&self, id: i64) -> StorageResult<bool> {
        self.remove_entry(TASKS_TABLE, id)
    }

    pub fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        self.list_json(TASKS_TABLE)
    }

    // ========== Timeline events ==========

    pub fn upsert_timeline_event(&self, event: &TimelineEvent) -> StorageResult<()> {
        self.put_json(TIMELINE_TABLE, event.id, event)
    }

    pub fn get_timeline_event(&self, id: i64) -> StorageResult<Option<TimelineEvent>> {
        self.get_json(TIMELINE_TABLE, id)
    }

    pub fn remove_timeline_event(&self, id: i64) -> StorageResult<bool> {
        self.remove_entry(TIMELINE_TABLE, id)
    }

    pub fn list_timeline_events(&self) -> StorageResult<Vec<TimelineEvent>> {
        self.list_json(TIMELINE_TABLE)
    }

    // ========== Seating chart ==========

    /// Load the full seating chart; empty if never saved
    pub fn load_chart(&self) -> StorageResult<Vec<SeatingTable>> {
        let txn = self.db.begin_read()?;
        let t = txn.open_table(CHART_TABLE)?;
        match t.get(CHART_KEY)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Save the full seating chart in a single commit
    pub fn save_chart(&self, tables: &[SeatingTable]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut t = txn.open_table(CHART_TABLE)?;
            let bytes = serde_json::to_vec(tables)?;
            t.insert(CHART_KEY, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    // ========== Wedding details ==========

    /// Details blob; defaults to an empty profile if never saved
    pub fn wedding_details(&self) -> StorageResult<WeddingDetails> {
        let txn = self.db.begin_read()?;
        let t = txn.open_table(DETAILS_TABLE)?;
        match t.get(DETAILS_KEY)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(WeddingDetails::default()),
        }
    }

    pub fn set_wedding_details(&self, details: &WeddingDetails) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut t = txn.open_table(DETAILS_TABLE)?;
            let bytes = serde_json::to_vec(details)?;
            t.insert(DETAILS_KEY, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    // ========== Maintenance ==========

    /// Wipe every table in one commit (the settings page "clear data")
    pub fn clear_all(&self) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            txn.delete_table(GUESTS_TABLE)?;
            txn.delete_table(BUDGET_TABLE)?;
            txn.delete_table(VENDORS_TABLE)?;
            txn.delete_table(TASKS_TABLE)?;
            txn.delete_table(TIMELINE_TABLE)?;
            txn.delete_table(CHART_TABLE)?;
            txn.delete_table(DETAILS_TABLE)?;
        }
        txn.commit()?;
        self.init_tables()?;
        tracing::info!("planner storage cleared");
        Ok(())
    }

    /// Row counts per table, for the startup log and the dashboard
    pub fn stats(&self) -> StorageResult<StorageStats> {
        let txn = self.db.begin_read()?;
        Ok(StorageStats {
            guest_count: txn.open_table(GUESTS_TABLE)?.len()?,
            budget_item_count: txn.open_table(BUDGET_TABLE)?.len()?,
            vendor_count: txn.open_table(VENDORS_TABLE)?.len()?,
            task_count: txn.open_table(TASKS_TABLE)?.len()?,
            timeline_event_count: txn.open_table(TIMELINE_TABLE)?.len()?,
        })
    }
}

/// Storage statistics
#[derive(Debug, Clone)]
pub struct StorageStats {
    pub guest_count: u64,
    pub budget_item_count: u64,
    pub vendor_count: u64,
    pub task_count: u64,
    pub timeline_event_count: u64,
}
