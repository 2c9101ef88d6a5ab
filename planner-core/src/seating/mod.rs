//! Seating allocation
//!
//! Tables, capacities, and the assignment of guest parties to tables.
//! [`chart::SeatingChart`] holds the state and the rules and does no I/O;
//! [`manager::SeatingManager`] wires it to the guest directory and the
//! persistent store.

mod chart;
mod error;
mod manager;

pub use chart::{GuestParty, PartyRoster, SeatingChart};
pub use error::{SeatingError, SeatingResult};
pub use manager::SeatingManager;
