//! Domain models
//!
//! Plain serde structs persisted as JSON values in the planner store.
//! Each entity carries a snowflake `i64` id; ascending id order is
//! creation order.

pub mod budget_item;
pub mod guest;
pub mod seating_table;
pub mod task;
pub mod timeline_event;
pub mod vendor;
pub mod wedding_details;

pub use budget_item::{BudgetItem, BudgetItemCreate, BudgetItemUpdate};
pub use guest::{Guest, GuestCreate, GuestRelation, GuestUpdate, RsvpStatus};
pub use seating_table::SeatingTable;
pub use task::{Task, TaskCreate, TaskUpdate};
pub use timeline_event::{TimelineEvent, TimelineEventCreate, TimelineEventUpdate, TimelineStatus};
pub use vendor::{Vendor, VendorCreate, VendorStatus, VendorUpdate};
pub use wedding_details::WeddingDetails;
