//! Vendor Model

use serde::{Deserialize, Serialize};

/// Wedding vendor entity (caterer, photographer, venue, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub status: VendorStatus,
    /// 0-5 stars
    pub rating: u8,
}

/// Booking state of a vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Approved,
    #[default]
    InProgress,
    NotApproved,
}

/// Create vendor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorCreate {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: VendorStatus,
    #[serde(default)]
    pub rating: u8,
}

/// Update vendor payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<VendorStatus>,
    pub rating: Option<u8>,
}
