//! Aggregate counts backing the dashboard.

use playlog_core::dashboard::{DashboardStats, GamesByStatus};
use playlog_core::game_status::GameStatus;
use sqlx::PgPool;

/// Read-only aggregate queries over games, notes and solutions.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute dashboard statistics from a single consistent snapshot.
    ///
    /// All three counts run inside one `REPEATABLE READ` read-only
    /// transaction so they describe the same committed state.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let status_rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM games GROUP BY status",
        )
        .fetch_all(&mut *tx)
        .await?;

        let (total_notes, total_solutions) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT (SELECT COUNT(*) FROM notes), (SELECT COUNT(*) FROM solutions)",
        )
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut counts = Vec::with_capacity(status_rows.len());
        for (status, count) in status_rows {
            let status = status
                .parse::<GameStatus>()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
            counts.push((status, count));
        }

        Ok(DashboardStats::compute(
            GamesByStatus::from_counts(counts),
            total_notes,
            total_solutions,
        ))
    }
}
