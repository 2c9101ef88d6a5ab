//! Timeline Event Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Milestone on the planning timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: i64,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub status: TimelineStatus,
}

/// Display state of a timeline milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    Completed,
    #[default]
    Upcoming,
    Warning,
}

/// Create timeline event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEventCreate {
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TimelineStatus,
}

/// Update timeline event payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineEventUpdate {
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TimelineStatus>,
}
