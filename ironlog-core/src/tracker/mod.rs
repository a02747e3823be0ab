//! The `Tracker` facade: one method per operation exposed to front ends.
//!
//! A `Tracker` acts for a single user. Every multi-step write (logging a set,
//! editing one, deleting one) runs inside a single transaction so session
//! totals and personal records never drift from the set table.

mod backup;
mod goals;
mod library;
mod records;
mod sets;
mod stats;
mod tracker;
mod workout;

pub use records::{refresh_personal_records, refresh_session_totals};
pub use tracker::Tracker;

#[cfg(test)]
mod tests;
