//! PostgreSQL persistence for the playlog game tracker.
//!
//! Owns the connection pool, the embedded migrations, the row/API models
//! and the repositories. Repositories are zero-sized structs whose methods
//! take `&PgPool` as the first argument.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Unique constraint guarding against importing the same catalog game twice.
pub const UQ_GAMES_RAWG_ID: &str = "uq_games_rawg_id";
/// Foreign key from `notes.game_id` to `games.id`.
pub const FK_NOTES_GAME: &str = "fk_notes_game";
/// Foreign key from `solutions.game_id` to `games.id`.
pub const FK_SOLUTIONS_GAME: &str = "fk_solutions_game";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// True when `err` is a unique violation on the named constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

/// True when `err` is a foreign-key violation on the named constraint.
pub fn is_foreign_key_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_foreign_key_violation() && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
