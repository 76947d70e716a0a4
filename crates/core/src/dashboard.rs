//! Dashboard statistics arithmetic.
//!
//! The db layer supplies raw counts; this module turns them into the
//! response shape. `total_games` is derived from the per-status counts so
//! the two can never disagree.

use serde::Serialize;

use crate::game_status::GameStatus;

/// Per-status game counts. Every status key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GamesByStatus {
    pub backlog: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub abandoned: i64,
}

impl GamesByStatus {
    /// Build from `(status, count)` pairs. Missing statuses count as zero;
    /// repeated statuses are summed.
    pub fn from_counts(counts: impl IntoIterator<Item = (GameStatus, i64)>) -> Self {
        let mut by_status = Self::default();
        for (status, count) in counts {
            *by_status.slot_mut(status) += count;
        }
        by_status
    }

    /// Count for a single status.
    pub fn get(&self, status: GameStatus) -> i64 {
        match status {
            GameStatus::Backlog => self.backlog,
            GameStatus::InProgress => self.in_progress,
            GameStatus::Completed => self.completed,
            GameStatus::Abandoned => self.abandoned,
        }
    }

    /// Sum over every status.
    pub fn total(&self) -> i64 {
        GameStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }

    fn slot_mut(&mut self, status: GameStatus) -> &mut i64 {
        match status {
            GameStatus::Backlog => &mut self.backlog,
            GameStatus::InProgress => &mut self.in_progress,
            GameStatus::Completed => &mut self.completed,
            GameStatus::Abandoned => &mut self.abandoned,
        }
    }
}

/// Aggregate statistics returned by `GET /dashboard/stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_games: i64,
    pub games_by_status: GamesByStatus,
    pub total_notes: i64,
    pub total_solutions: i64,
    pub avg_notes_per_game: f64,
    pub avg_solutions_per_game: f64,
}

impl DashboardStats {
    pub fn compute(games_by_status: GamesByStatus, total_notes: i64, total_solutions: i64) -> Self {
        let total_games = games_by_status.total();
        Self {
            total_games,
            games_by_status,
            total_notes,
            total_solutions,
            avg_notes_per_game: average(total_notes, total_games),
            avg_solutions_per_game: average(total_solutions, total_games),
        }
    }
}

/// `count / games`, or `0.0` when there are no games.
pub fn average(count: i64, games: i64) -> f64 {
    if games <= 0 {
        return 0.0;
    }
    count as f64 / games as f64
}
