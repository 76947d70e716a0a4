//! Import of a game from the RAWG catalog into the local library.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use playlog_core::error::CoreError;
use playlog_core::game_status::GameStatus;
use playlog_core::validation::validate_positive_id;
use playlog_db::models::game::{Game, ImportedGame};
use playlog_db::repositories::GameRepo;
use playlog_upstream::rawg::{CatalogError, CatalogGameDetails};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Body of `POST /games/import_from_rawg`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub rawg_id: i64,
    /// Defaults to `backlog` if omitted.
    pub status: Option<GameStatus>,
}

fn already_imported(rawg_id: i64) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Game with RAWG ID {rawg_id} has already been imported."
    )))
}

/// POST /api/games/import_from_rawg
///
/// The pre-check only avoids a pointless upstream call. Two concurrent
/// imports can both pass it; `uq_games_rawg_id` lets exactly one insert win.
pub async fn import_from_rawg(
    State(state): State<AppState>,
    AppJson(input): AppJson<ImportRequest>,
) -> AppResult<(StatusCode, Json<Game>)> {
    validate_positive_id("rawgId", input.rawg_id)?;

    if GameRepo::find_id_by_rawg_id(&state.pool, input.rawg_id)
        .await?
        .is_some()
    {
        return Err(already_imported(input.rawg_id));
    }

    let details = state.catalog.game_details(input.rawg_id).await?;
    let imported = imported_game(input.rawg_id, details, input.status.unwrap_or_default())?;

    let game = GameRepo::create_imported(&state.pool, &imported)
        .await
        .map_err(|err| {
            if playlog_db::is_unique_violation(&err, playlog_db::UQ_GAMES_RAWG_ID) {
                already_imported(input.rawg_id)
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(game_id = game.id, rawg_id = input.rawg_id, "Game imported from RAWG");
    Ok((StatusCode::CREATED, Json(game)))
}

/// Map catalog metadata onto a new game record.
///
/// The cover image fills both `image_url` and `background_image`. A release
/// date that is not `YYYY-MM-DD` is dropped. A nameless catalog entry is
/// the catalog's fault, not the client's.
fn imported_game(
    rawg_id: i64,
    details: CatalogGameDetails,
    status: GameStatus,
) -> Result<ImportedGame, CatalogError> {
    if details.name.trim().is_empty() {
        return Err(CatalogError::Unusable(format!(
            "RAWG game {rawg_id} has no name"
        )));
    }

    let released = details
        .released
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

    Ok(ImportedGame {
        rawg_id,
        name: details.name,
        slug: Some(details.slug).filter(|s| !s.is_empty()),
        description: details.description,
        image_url: details.background_image.clone(),
        background_image: details.background_image,
        status,
        released,
        rating: details.rating,
        platforms: details.platforms,
        genres: details.genres,
        developers: details.developers,
        publishers: details.publishers,
    })
}
