//! Planner facade
//!
//! Opens the store once and hands out the per-area managers over shared
//! handles. The dashboard summary is assembled here because it cuts
//! across every area.

use crate::budget::BudgetTracker;
use crate::config::PlannerConfig;
use crate::guests::GuestDirectory;
use crate::seating::SeatingManager;
use crate::storage::PlannerStorage;
use crate::tasks::TaskBoard;
use crate::timeline::Timeline;
use crate::vendors::VendorBook;
use crate::wedding::WeddingProfile;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::VendorStatus;
use tracing::info;

pub struct Planner {
    storage: PlannerStorage,
    pub guests: GuestDirectory,
    pub seating: SeatingManager,
    pub budget: BudgetTracker,
    pub vendors: VendorBook,
    pub tasks: TaskBoard,
    pub timeline: Timeline,
    pub wedding: WeddingProfile,
}

/// Cross-area counters for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub guest_entries: usize,
    pub total_invited: u32,
    pub confirmed_invited: u32,
    pub planned_total: Decimal,
    pub deposit_total: Decimal,
    pub tasks_total: usize,
    pub tasks_completed: usize,
    pub vendors_total: usize,
    pub vendors_approved: usize,
    pub tables: usize,
    pub seated_parties: usize,
    pub unassigned_parties: usize,
    /// `None` until a wedding date is set
    pub days_until: Option<i64>,
}

impl Planner {
    /// Open (or create) the planner database under the configured data
    /// directory
    pub fn open(config: &PlannerConfig) -> AppResult<Self> {
        std::fs::create_dir_all(&config.data_dir)
            .map_err(|e| AppError::persistence(format!("create data dir: {}", e)))?;
        let storage = PlannerStorage::open(config.db_path())?;
        Self::with_storage(storage)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> AppResult<Self> {
        Self::with_storage(PlannerStorage::open_in_memory()?)
    }

    fn with_storage(storage: PlannerStorage) -> AppResult<Self> {
        let stats = storage.stats()?;
        info!(
            guests = stats.guest_count,
            vendors = stats.vendor_count,
            tasks = stats.task_count,
            "planner opened"
        );
        let seating = SeatingManager::open(storage.clone()).map_err(AppError::from)?;
        Ok(Self {
            guests: GuestDirectory::new(storage.clone()),
            seating,
            budget: BudgetTracker::new(storage.clone()),
            vendors: VendorBook::new(storage.clone()),
            tasks: TaskBoard::new(storage.clone()),
            timeline: Timeline::new(storage.clone()),
            wedding: WeddingProfile::new(storage.clone()),
            storage,
        })
    }

    pub fn overview(&self) -> AppResult<DashboardSummary> {
        self.overview_at(Local::now().date_naive())
    }

    /// Dashboard counters with an explicit "today" for the countdown
    pub fn overview_at(&self, today: NaiveDate) -> AppResult<DashboardSummary> {
        let guests = self.guests.list()?;
        let budget = self.budget.summary()?;
        let tasks = self.tasks.list()?;
        let vendors = self.vendors.list()?;

        Ok(DashboardSummary {
            guest_entries: guests.len(),
            total_invited: guests.iter().map(|g| g.invited_count).sum(),
            confirmed_invited: self.guests.confirmed_invited()?,
            planned_total: budget.planned_total,
            deposit_total: budget.deposit_total,
            tasks_total: tasks.len(),
            tasks_completed: tasks.iter().filter(|t| t.completed).count(),
            vendors_total: vendors.len(),
            vendors_approved: vendors
                .iter()
                .filter(|v| v.status == VendorStatus::Approved)
                .count(),
            tables: self.seating.tables().len(),
            seated_parties: self.seating.seated_party_count(),
            unassigned_parties: self.seating.unassigned_parties()?.len(),
            days_until: self.wedding.days_until(today)?,
        })
    }

    /// Wipe every record and start over
    pub fn reset(&mut self) -> AppResult<()> {
        self.storage.clear_all()?;
        self.seating = SeatingManager::open(self.storage.clone())?;
        info!("planner data cleared");
        Ok(())
    }
}
