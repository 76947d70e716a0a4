//! Handlers for solutions attached to a game, including AI-drafted ones.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playlog_core::solutions::build_solution_prompt;
use playlog_core::types::DbId;
use playlog_core::validation::{validate_positive_id, validate_required_text};
use playlog_db::models::solution::{CreateSolution, Solution};
use playlog_db::repositories::{GameRepo, SolutionRepo};
use serde::Deserialize;

use super::notes::GameIdQuery;
use super::{missing_game_on_fk, not_found};
use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSolutionRequest {
    pub solution_id: DbId,
}

/// Body of `POST /games/solutions/generate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSolutionRequest {
    pub game_id: DbId,
    pub problem: String,
}

/// GET /api/games/solutions?gameId=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<GameIdQuery>,
) -> AppResult<Json<Vec<Solution>>> {
    validate_positive_id("gameId", query.game_id)?;

    let solutions = SolutionRepo::list_by_game(&state.pool, query.game_id).await?;
    Ok(Json(solutions))
}

/// POST /api/games/solutions
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSolution>,
) -> AppResult<(StatusCode, Json<Solution>)> {
    validate_positive_id("gameId", input.game_id)?;
    validate_required_text("problem", &input.problem)?;
    validate_required_text("solution", &input.solution)?;

    let solution = insert(&state, &input).await?;
    tracing::info!(
        solution_id = solution.id,
        game_id = solution.game_id,
        ai_generated = solution.ai_generated,
        "Solution created",
    );
    Ok((StatusCode::CREATED, Json(solution)))
}

/// POST /api/games/solutions/generate
///
/// Nothing is written unless the completion call succeeds.
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateSolutionRequest>,
) -> AppResult<(StatusCode, Json<Solution>)> {
    validate_positive_id("gameId", input.game_id)?;
    validate_required_text("problem", &input.problem)?;

    let game = GameRepo::find_by_id(&state.pool, input.game_id)
        .await?
        .ok_or_else(|| not_found("Game", input.game_id))?;

    let prompt = build_solution_prompt(&game.name, &input.problem)?;
    let text = state.completion.complete(&prompt).await?;

    let solution = insert(
        &state,
        &CreateSolution {
            game_id: game.id,
            problem: input.problem,
            solution: text,
            ai_generated: true,
        },
    )
    .await?;

    tracing::info!(solution_id = solution.id, game_id = game.id, "AI solution generated");
    Ok((StatusCode::CREATED, Json(solution)))
}

/// DELETE /api/games/solutions
pub async fn delete(
    State(state): State<AppState>,
    AppJson(input): AppJson<DeleteSolutionRequest>,
) -> AppResult<Json<SuccessResponse>> {
    validate_positive_id("solutionId", input.solution_id)?;

    if !SolutionRepo::delete(&state.pool, input.solution_id).await? {
        return Err(not_found("Solution", input.solution_id));
    }

    tracing::info!(solution_id = input.solution_id, "Solution deleted");
    Ok(Json(SuccessResponse::ok()))
}

async fn insert(state: &AppState, input: &CreateSolution) -> AppResult<Solution> {
    SolutionRepo::create(&state.pool, input)
        .await
        .map_err(|err| missing_game_on_fk(err, playlog_db::FK_SOLUTIONS_GAME, input.game_id))
}
