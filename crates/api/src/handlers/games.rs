//! Handlers for the `/games` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlog_core::game_status::GameStatus;
use playlog_core::types::DbId;
use playlog_core::validation::{validate_image_url, validate_positive_id, validate_required_text};
use playlog_db::models::game::{CreateGame, Game};
use playlog_db::repositories::GameRepo;
use serde::Deserialize;

use super::not_found;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Body of `POST /games/delete`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGameRequest {
    pub game_id: DbId,
}

/// Body of `POST /games/status`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub game_id: DbId,
    pub status: GameStatus,
}

/// GET /api/games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(games))
}

/// POST /api/games
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateGame>,
) -> AppResult<(StatusCode, Json<Game>)> {
    validate_required_text("name", &input.name)?;
    validate_image_url(input.image_url.as_deref())?;

    let game = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(game_id = game.id, status = %game.status, "Game created");
    Ok((StatusCode::CREATED, Json(game)))
}

/// POST /api/games/delete
///
/// Removes the game with all of its notes and solutions, or nothing at all.
pub async fn delete(
    State(state): State<AppState>,
    AppJson(input): AppJson<DeleteGameRequest>,
) -> AppResult<Json<SuccessResponse>> {
    validate_positive_id("gameId", input.game_id)?;

    let deletion = GameRepo::delete_cascade(&state.pool, input.game_id)
        .await?
        .ok_or_else(|| not_found("Game", input.game_id))?;

    tracing::info!(
        game_id = input.game_id,
        notes_deleted = deletion.notes_deleted,
        solutions_deleted = deletion.solutions_deleted,
        "Game deleted",
    );
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/games/status
pub async fn update_status(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateStatusRequest>,
) -> AppResult<Json<Game>> {
    validate_positive_id("gameId", input.game_id)?;

    let game = GameRepo::update_status(&state.pool, input.game_id, input.status)
        .await?
        .ok_or_else(|| not_found("Game", input.game_id))?;

    tracing::info!(game_id = game.id, status = %game.status, "Game status updated");
    Ok(Json(game))
}
