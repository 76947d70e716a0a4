//! Note entity model and DTOs.
//!
//! The struct reads snake_case columns through `FromRow` and serializes
//! camelCase keys through serde, so it is both the row and the API shape.

use playlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub game_id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a note (`POST /games/notes`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub game_id: DbId,
    pub title: String,
    pub content: String,
}
