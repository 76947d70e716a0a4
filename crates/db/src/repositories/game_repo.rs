//! Repository for the `games` table.

use playlog_core::game_status::GameStatus;
use playlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{CreateGame, Game, GameDeletion, GameRow, ImportedGame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, image_url, background_image, status, \
    released, rating, platforms, genres, developers, publishers, rawg_id, created_at, updated_at";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a hand-entered game, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `backlog`.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (name, description, image_url, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.status.unwrap_or_default().as_str())
            .fetch_one(pool)
            .await?;
        into_game(row)
    }

    /// Insert a game imported from the external catalog.
    ///
    /// A second insert with the same `rawg_id` fails with a unique violation
    /// on `uq_games_rawg_id`, which callers map to a conflict.
    pub async fn create_imported(
        pool: &PgPool,
        input: &ImportedGame,
    ) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games
                (name, slug, description, image_url, background_image, status,
                 released, rating, platforms, genres, developers, publishers, rawg_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.background_image)
            .bind(input.status.as_str())
            .bind(input.released)
            .bind(input.rating)
            .bind(&input.platforms)
            .bind(&input.genres)
            .bind(&input.developers)
            .bind(&input.publishers)
            .bind(input.rawg_id)
            .fetch_one(pool)
            .await?;
        into_game(row)
    }

    /// Find a game by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, GameRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(into_game)
            .transpose()
    }

    /// Return the ID of the game imported from `rawg_id`, if any.
    pub async fn find_id_by_rawg_id(
        pool: &PgPool,
        rawg_id: i64,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM games WHERE rawg_id = $1")
            .bind(rawg_id)
            .fetch_optional(pool)
            .await
    }

    /// List all games ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, GameRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(into_game)
            .collect()
    }

    /// Set a game's status. `updated_at` is refreshed by `trg_games_updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: GameStatus,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameRow>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await?
            .map(into_game)
            .transpose()
    }

    /// Delete a game together with its notes and solutions in one transaction.
    ///
    /// The game row is locked first, so a concurrent note/solution insert for
    /// the same game either commits before the delete (and is removed with
    /// it) or fails its foreign-key check afterwards. Returns `None`, with
    /// nothing deleted, if the game does not exist.
    pub async fn delete_cascade(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GameDeletion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked = sqlx::query_scalar::<_, DbId>("SELECT id FROM games WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let solutions_deleted = sqlx::query("DELETE FROM solutions WHERE game_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let notes_deleted = sqlx::query("DELETE FROM notes WHERE game_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(game_id = id, notes_deleted, solutions_deleted, "Game deleted");

        Ok(Some(GameDeletion {
            notes_deleted,
            solutions_deleted,
        }))
    }
}

/// Convert a stored row into the API model, surfacing a bad status as a decode error.
fn into_game(row: GameRow) -> Result<Game, sqlx::Error> {
    Game::try_from(row).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
