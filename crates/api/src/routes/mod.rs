pub mod dashboard;
pub mod games;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                          list, create
/// /games/delete                   delete with notes and solutions (POST)
/// /games/status                   update status (POST)
/// /games/import_from_rawg         import from RAWG (POST)
/// /games/rawg_search              search RAWG (POST)
/// /games/rawg_details             RAWG details (POST)
/// /games/notes                    list, create, delete
/// /games/solutions                list, create, delete
/// /games/solutions/generate       AI-drafted solution (POST)
///
/// /dashboard/stats                aggregate statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .nest("/dashboard", dashboard::router())
}
