//! Game entity: storage row, API model and DTOs.
//!
//! [`GameRow`] mirrors the snake_case `games` table. [`Game`] is what the
//! API serializes (camelCase keys, typed status). The only conversion
//! between the two is `Game::try_from(GameRow)`.

use chrono::NaiveDate;
use playlog_core::error::CoreError;
use playlog_core::game_status::GameStatus;
use playlog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub background_image: Option<String>,
    pub status: String,
    pub released: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub platforms: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub developers: Option<Vec<String>>,
    pub publishers: Option<Vec<String>>,
    pub rawg_id: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A game as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub background_image: Option<String>,
    pub status: GameStatus,
    pub released: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub platforms: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub developers: Option<Vec<String>>,
    pub publishers: Option<Vec<String>>,
    pub rawg_id: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<GameRow> for Game {
    type Error = CoreError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<GameStatus>().map_err(|_| {
            CoreError::Internal(format!(
                "game {} has unknown stored status '{}'",
                row.id, row.status
            ))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            image_url: row.image_url,
            background_image: row.background_image,
            status,
            released: row.released,
            rating: row.rating,
            platforms: row.platforms,
            genres: row.genres,
            developers: row.developers,
            publishers: row.publishers,
            rawg_id: row.rawg_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// DTO for creating a game by hand (`POST /games`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to `backlog` if omitted.
    pub status: Option<GameStatus>,
}

/// Fully-populated insert for a game imported from the external catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedGame {
    pub rawg_id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub background_image: Option<String>,
    pub status: GameStatus,
    pub released: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
}

/// Dependent rows removed alongside a deleted game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDeletion {
    pub notes_deleted: u64,
    pub solutions_deleted: u64,
}
