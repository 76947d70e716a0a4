//! Solution entity model and DTOs.

use playlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `solutions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: DbId,
    pub game_id: DbId,
    pub problem: String,
    pub solution: String,
    pub ai_generated: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a solution (`POST /games/solutions`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSolution {
    pub game_id: DbId,
    pub problem: String,
    pub solution: String,
    #[serde(default)]
    pub ai_generated: bool,
}
