//! Domain types and rules for the playlog game tracker.
//!
//! Everything in this crate is pure: no database, no network. The db and
//! api crates build on these types and validators.

pub mod dashboard;
pub mod error;
pub mod game_status;
pub mod solutions;
pub mod types;
pub mod validation;
