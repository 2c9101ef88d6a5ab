//! Wedding Details Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Core facts about the wedding, filled in during onboarding
///
/// All fields start empty; `date` stays `None` until a date is chosen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeddingDetails {
    #[serde(default)]
    pub groom_name: String,
    #[serde(default)]
    pub bride_name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub estimated_guests: u32,
}
