//! Budget Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget line item
///
/// `planned` is the budgeted amount for the category, `deposit` the
/// amount already paid to the vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: i64,
    pub category: String,
    pub description: String,
    pub planned: Decimal,
    pub deposit: Decimal,
}

/// Create budget item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItemCreate {
    pub category: String,
    pub description: String,
    pub planned: Decimal,
    #[serde(default)]
    pub deposit: Decimal,
}

/// Update budget item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetItemUpdate {
    pub category: Option<String>,
    pub description: Option<String>,
    pub planned: Option<Decimal>,
    pub deposit: Option<Decimal>,
}
