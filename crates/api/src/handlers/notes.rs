//! Handlers for notes attached to a game.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlog_core::types::DbId;
use playlog_core::validation::{validate_positive_id, validate_required_text};
use playlog_db::models::note::{CreateNote, Note};
use playlog_db::repositories::NoteRepo;
use serde::Deserialize;

use super::{missing_game_on_fk, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Query string shared by the note and solution list endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameIdQuery {
    pub game_id: DbId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteRequest {
    pub note_id: DbId,
}

/// GET /api/games/notes?gameId=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<GameIdQuery>,
) -> AppResult<Json<Vec<Note>>> {
    validate_positive_id("gameId", query.game_id)?;

    let notes = NoteRepo::list_by_game(&state.pool, query.game_id).await?;
    Ok(Json(notes))
}

/// POST /api/games/notes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    validate_positive_id("gameId", input.game_id)?;
    validate_required_text("title", &input.title)?;
    validate_required_text("content", &input.content)?;

    let note = NoteRepo::create(&state.pool, &input)
        .await
        .map_err(|err| missing_game_on_fk(err, playlog_db::FK_NOTES_GAME, input.game_id))?;

    tracing::info!(note_id = note.id, game_id = note.game_id, "Note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// DELETE /api/games/notes
pub async fn delete(
    State(state): State<AppState>,
    AppJson(input): AppJson<DeleteNoteRequest>,
) -> AppResult<Json<SuccessResponse>> {
    validate_positive_id("noteId", input.note_id)?;

    if !NoteRepo::delete(&state.pool, input.note_id).await? {
        return Err(not_found("Note", input.note_id));
    }

    tracing::info!(note_id = input.note_id, "Note deleted");
    Ok(Json(SuccessResponse::ok()))
}
