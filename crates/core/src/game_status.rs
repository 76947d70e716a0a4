//! Game lifecycle status.
//!
//! The status set is closed: creation defaults, request validation, storage
//! (a `CHECK` constraint on `games.status`) and the dashboard breakdown all
//! use exactly these four values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle state of a tracked game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Backlog,
    InProgress,
    Completed,
    Abandoned,
}

/// All valid status strings, in dashboard order.
pub const VALID_GAME_STATUSES: &[&str] = &["backlog", "in_progress", "completed", "abandoned"];

impl GameStatus {
    /// Every status, in the same order as [`VALID_GAME_STATUSES`].
    pub const ALL: [GameStatus; 4] = [
        GameStatus::Backlog,
        GameStatus::InProgress,
        GameStatus::Completed,
        GameStatus::Abandoned,
    ];

    /// Return the status as its stored string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        }
    }
}

impl FromStr for GameStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Self::Backlog),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "abandoned" => Ok(Self::Abandoned),
            _ => Err(CoreError::Validation(format!(
                "Invalid game status '{s}'. Must be one of: {}",
                VALID_GAME_STATUSES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
