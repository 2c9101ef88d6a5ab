//! Vendor book
//!
//! Tracks suppliers being considered or booked for the wedding, with a
//! booking status and a 0-5 star rating.

use crate::storage::PlannerStorage;
use shared::error::{AppError, AppResult};
use shared::models::{Vendor, VendorCreate, VendorStatus, VendorUpdate};
use shared::util::snowflake_id;
use tracing::info;

const MAX_RATING: u8 = 5;

pub struct VendorBook {
    storage: PlannerStorage,
}

impl VendorBook {
    pub fn new(storage: PlannerStorage) -> Self {
        Self { storage }
    }

    pub fn add(&self, create: VendorCreate) -> AppResult<Vendor> {
        let name = create.name.trim();
        if name.is_empty() {
            return Err(AppError::required("name"));
        }
        let category = create.category.trim();
        if category.is_empty() {
            return Err(AppError::required("category"));
        }
        if create.rating > MAX_RATING {
            return Err(AppError::out_of_range("rating", "rating must be 0-5"));
        }

        let vendor = Vendor {
            id: snowflake_id(),
            name: name.to_string(),
            category: category.to_string(),
            contact: create.contact.trim().to_string(),
            phone: create.phone.trim().to_string(),
            email: create.email.trim().to_string(),
            status: create.status,
            rating: create.rating,
        };
        self.storage.upsert_vendor(&vendor)?;
        info!(vendor_id = vendor.id, category = %vendor.category, "vendor added");
        Ok(vendor)
    }

    pub fn update(&self, id: i64, update: VendorUpdate) -> AppResult<Vendor> {
        let mut vendor = self.get(id)?;

        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::required("name"));
            }
            vendor.name = name;
        }
        if let Some(category) = update.category {
            let category = category.trim().to_string();
            if category.is_empty() {
                return Err(AppError::required("category"));
            }
            vendor.category = category;
        }
        if let Some(contact) = update.contact {
            vendor.contact = contact.trim().to_string();
        }
        if let Some(phone) = update.phone {
            vendor.phone = phone.trim().to_string();
        }
        if let Some(email) = update.email {
            vendor.email = email.trim().to_string();
        }
        if let Some(status) = update.status {
            vendor.status = status;
        }
        if let Some(rating) = update.rating {
            if rating > MAX_RATING {
                return Err(AppError::out_of_range("rating", "rating must be 0-5"));
            }
            vendor.rating = rating;
        }

        self.storage.upsert_vendor(&vendor)?;
        Ok(vendor)
    }

    pub fn remove(&self, id: i64) -> AppResult<()> {
        if !self.storage.remove_vendor(id)? {
            return Err(AppError::not_found("vendor").with_detail("vendor_id", id));
        }
        Ok(())
    }

    pub fn get(&self, id: i64) -> AppResult<Vendor> {
        self.storage
            .get_vendor(id)?
            .ok_or_else(|| AppError::not_found("vendor").with_detail("vendor_id", id))
    }

    pub fn list(&self) -> AppResult<Vec<Vendor>> {
        Ok(self.storage.list_vendors()?)
    }

    pub fn by_status(&self, status: VendorStatus) -> AppResult<Vec<Vendor>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|v| v.status == status)
            .collect())
    }

    /// Case-insensitive match on the category name
    pub fn by_category(&self, category: &str) -> AppResult<Vec<Vendor>> {
        let needle = category.trim().to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .filter(|v| v.category.to_lowercase() == needle)
            .collect())
    }

    pub fn approved_count(&self) -> AppResult<usize> {
        Ok(self.by_status(VendorStatus::Approved)?.len())
    }
}
