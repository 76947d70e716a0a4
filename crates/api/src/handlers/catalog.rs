//! Pass-through lookups against the RAWG catalog.

use axum::extract::State;
use axum::Json;
use playlog_core::validation::{validate_positive_id, validate_required_text};
use playlog_upstream::rawg::{CatalogGameDetails, CatalogGameSummary};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_query: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsRequest {
    pub rawg_id: i64,
}

/// POST /api/games/rawg_search
pub async fn search(
    State(state): State<AppState>,
    AppJson(input): AppJson<SearchRequest>,
) -> AppResult<Json<Vec<CatalogGameSummary>>> {
    validate_required_text("searchQuery", &input.search_query)?;

    let results = state.catalog.search(input.search_query.trim()).await?;
    Ok(Json(results))
}

/// POST /api/games/rawg_details
pub async fn details(
    State(state): State<AppState>,
    AppJson(input): AppJson<DetailsRequest>,
) -> AppResult<Json<CatalogGameDetails>> {
    validate_positive_id("rawgId", input.rawg_id)?;

    let details = state.catalog.game_details(input.rawg_id).await?;
    Ok(Json(details))
}
