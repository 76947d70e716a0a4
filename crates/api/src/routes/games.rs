//! Route definitions for the `/games` resource and its notes and solutions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{catalog, games, import, notes, solutions};
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// POST   /delete               -> delete
/// POST   /status               -> update_status
/// POST   /import_from_rawg     -> import_from_rawg
/// POST   /rawg_search          -> catalog search
/// POST   /rawg_details         -> catalog details
///
/// GET    /notes?gameId=        -> notes::list
/// POST   /notes                -> notes::create
/// DELETE /notes                -> notes::delete
///
/// GET    /solutions?gameId=    -> solutions::list
/// POST   /solutions            -> solutions::create
/// DELETE /solutions            -> solutions::delete
/// POST   /solutions/generate   -> solutions::generate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list).post(games::create))
        .route("/delete", post(games::delete))
        .route("/status", post(games::update_status))
        .route("/import_from_rawg", post(import::import_from_rawg))
        .route("/rawg_search", post(catalog::search))
        .route("/rawg_details", post(catalog::details))
        .route(
            "/notes",
            get(notes::list).post(notes::create).delete(notes::delete),
        )
        .route(
            "/solutions",
            get(solutions::list)
                .post(solutions::create)
                .delete(solutions::delete),
        )
        .route("/solutions/generate", post(solutions::generate))
}
