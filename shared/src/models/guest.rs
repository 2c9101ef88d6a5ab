//! Guest Model

use serde::{Deserialize, Serialize};

/// Guest list entry
///
/// One entry is one invited party: `invited_count` people who are seated
/// together and never split across tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub relation: GuestRelation,
    pub invited_count: u32,
    pub rsvp: RsvpStatus,
    pub special_notes: String,
}

/// How the guest relates to the couple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestRelation {
    Family,
    Friends,
    Work,
}

/// RSVP state of a guest party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Confirmed,
    Declined,
    #[default]
    Maybe,
}

/// Create guest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCreate {
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub relation: GuestRelation,
    pub invited_count: u32,
    #[serde(default)]
    pub rsvp: RsvpStatus,
    #[serde(default)]
    pub special_notes: String,
}

/// Update guest payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestUpdate {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub relation: Option<GuestRelation>,
    pub invited_count: Option<u32>,
    pub rsvp: Option<RsvpStatus>,
    pub special_notes: Option<String>,
}
