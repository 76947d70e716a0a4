//! Repository for the `solutions` table.

use playlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::solution::{CreateSolution, Solution};

/// Column list for solutions queries.
const COLUMNS: &str = "id, game_id, problem, solution, ai_generated, created_at";

/// Provides create/list/delete operations for problem/solution pairs.
pub struct SolutionRepo;

impl SolutionRepo {
    /// Insert a solution. Fails with a foreign-key violation on
    /// `fk_solutions_game` if the game does not exist.
    pub async fn create(pool: &PgPool, input: &CreateSolution) -> Result<Solution, sqlx::Error> {
        let query = format!(
            "INSERT INTO solutions (game_id, problem, solution, ai_generated)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Solution>(&query)
            .bind(input.game_id)
            .bind(&input.problem)
            .bind(&input.solution)
            .bind(input.ai_generated)
            .fetch_one(pool)
            .await
    }

    /// List a game's solutions, newest first.
    pub async fn list_by_game(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<Solution>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM solutions
             WHERE game_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Solution>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a solution by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM solutions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
