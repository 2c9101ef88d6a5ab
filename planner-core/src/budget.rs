//! Budget tracker
//!
//! Budget lines with a planned amount and the deposit already paid.
//! Totals are recomputed from the stored items on every call.

use crate::storage::PlannerStorage;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{BudgetItem, BudgetItemCreate, BudgetItemUpdate};
use shared::util::snowflake_id;
use tracing::info;

pub struct BudgetTracker {
    storage: PlannerStorage,
}

/// Planned/deposit totals, overall and per category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub planned_total: Decimal,
    pub deposit_total: Decimal,
    pub by_category: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub planned: Decimal,
    pub deposit: Decimal,
}

impl BudgetTracker {
    pub fn new(storage: PlannerStorage) -> Self {
        Self { storage }
    }

    pub fn add(&self, create: BudgetItemCreate) -> AppResult<BudgetItem> {
        let category = create.category.trim();
        if category.is_empty() {
            return Err(AppError::required("category"));
        }
        if create.planned <= Decimal::ZERO {
            return Err(AppError::out_of_range("planned", "planned must be positive"));
        }
        if create.deposit < Decimal::ZERO {
            return Err(AppError::out_of_range(
                "deposit",
                "deposit must not be negative",
            ));
        }

        let item = BudgetItem {
            id: snowflake_id(),
            category: category.to_string(),
            description: create.description.trim().to_string(),
            planned: create.planned,
            deposit: create.deposit,
        };
        self.storage.upsert_budget_item(&item)?;
        info!(item_id = item.id, category = %item.category, "budget item added");
        Ok(item)
    }

    pub fn update(&self, id: i64, update: BudgetItemUpdate) -> AppResult<BudgetItem> {
        let mut item = self.get(id)?;

        if let Some(category) = update.category {
            let category = category.trim().to_string();
            if category.is_empty() {
                return Err(AppError::required("category"));
            }
            item.category = category;
        }
        if let Some(description) = update.description {
            item.description = description.trim().to_string();
        }
        if let Some(planned) = update.planned {
            if planned <= Decimal::ZERO {
                return Err(AppError::out_of_range("planned", "planned must be positive"));
            }
            item.planned = planned;
        }
        if let Some(deposit) = update.deposit {
            if deposit < Decimal::ZERO {
                return Err(AppError::out_of_range(
                    "deposit",
                    "deposit must not be negative",
                ));
            }
            item.deposit = deposit;
        }

        self.storage.upsert_budget_item(&item)?;
        Ok(item)
    }

    pub fn remove(&self, id: i64) -> AppResult<()> {
        if !self.storage.remove_budget_item(id)? {
            return Err(AppError::not_found("budget item").with_detail("item_id", id));
        }
        Ok(())
    }

    pub fn get(&self, id: i64) -> AppResult<BudgetItem> {
        self.storage
            .get_budget_item(id)?
            .ok_or_else(|| AppError::not_found("budget item").with_detail("item_id", id))
    }

    pub fn list(&self) -> AppResult<Vec<BudgetItem>> {
        Ok(self.storage.list_budget_items()?)
    }

    /// Totals recomputed from the stored items; categories keep first-seen
    /// order
    pub fn summary(&self) -> AppResult<BudgetSummary> {
        let items = self.list()?;
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut planned_total = Decimal::ZERO;
        let mut deposit_total = Decimal::ZERO;

        for item in &items {
            planned_total += item.planned;
            deposit_total += item.deposit;
            match by_category.iter_mut().find(|c| c.category == item.category) {
                Some(entry) => {
                    entry.planned += item.planned;
                    entry.deposit += item.deposit;
                }
                None => by_category.push(CategoryTotal {
                    category: item.category.clone(),
                    planned: item.planned,
                    deposit: item.deposit,
                }),
            }
        }

        Ok(BudgetSummary {
            planned_total,
            deposit_total,
            by_category,
        })
    }
}
