//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A `Serialize` camelCase shape returned by the API
//! - `Deserialize` create DTOs for inserts

pub mod game;
pub mod note;
pub mod solution;
