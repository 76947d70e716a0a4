//! Request handlers, one submodule per resource.
//!
//! Handlers validate input with `playlog_core`, delegate to the matching
//! repository in `playlog_db` or upstream client in `playlog_upstream`, and
//! map failures through [`AppError`].

pub mod catalog;
pub mod dashboard;
pub mod games;
pub mod import;
pub mod notes;
pub mod solutions;

use playlog_core::error::CoreError;
use playlog_core::types::DbId;

use crate::error::AppError;

/// Shorthand for a 404 on an entity with the given id.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// Map a foreign-key violation on `constraint` to a 404 for the owning game.
pub(crate) fn missing_game_on_fk(err: sqlx::Error, constraint: &str, game_id: DbId) -> AppError {
    if playlog_db::is_foreign_key_violation(&err, constraint) {
        not_found("Game", game_id)
    } else {
        AppError::Database(err)
    }
}
