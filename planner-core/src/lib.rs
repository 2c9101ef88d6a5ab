//! Wedding planner core
//!
//! Library behind the planner: guest directory, seating chart, budget,
//! vendors, tasks, timeline and the wedding profile, all persisted in an
//! embedded redb database.
//!
//! # Module structure
//!
//! ```text
//! planner-core/src/
//! ├── config.rs      # env-driven configuration
//! ├── logging.rs     # tracing setup
//! ├── storage.rs     # redb persistence layer
//! ├── seating/       # seating chart core + manager
//! ├── guests.rs      # guest directory
//! ├── budget.rs      # budget tracker
//! ├── vendors.rs     # vendor book
//! ├── tasks.rs       # task board
//! ├── timeline.rs    # planning timeline
//! ├── wedding.rs     # wedding profile
//! └── planner.rs     # facade + dashboard summary
//! ```

pub mod budget;
pub mod config;
pub mod guests;
pub mod logging;
pub mod planner;
pub mod seating;
pub mod storage;
pub mod tasks;
pub mod timeline;
pub mod vendors;
pub mod wedding;

pub use budget::{BudgetSummary, BudgetTracker, CategoryTotal};
pub use config::PlannerConfig;
pub use guests::GuestDirectory;
pub use planner::{DashboardSummary, Planner};
pub use seating::{GuestParty, PartyRoster, SeatingChart, SeatingError, SeatingManager};
pub use storage::{PlannerStorage, StorageError, StorageStats};
pub use tasks::TaskBoard;
pub use timeline::Timeline;
pub use vendors::VendorBook;
pub use wedding::WeddingProfile;

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use logging::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let config = PlannerConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir());
}
