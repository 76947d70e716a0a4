//! REST client for the RAWG game catalog.
//!
//! Wraps `GET /games?search=` and `GET /games/{id}` and flattens RAWG's
//! nested platform/genre/company objects into plain name lists.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of search results requested from RAWG.
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// HTTP client for the RAWG API.
///
/// The API key travels as a query parameter, so every `reqwest::Error`
/// leaving this client has its URL stripped.
pub struct RawgClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Errors from the RAWG API layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("Game catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// RAWG returned a non-2xx status code.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// RAWG's `detail` message, or a generic description of the failure.
        message: String,
    },

    /// RAWG answered successfully but the payload cannot be used.
    #[error("{0}")]
    Unusable(String),
}

/// One search hit, as returned by `POST /games/rawg_search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGameSummary {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub background_image: Option<String>,
    /// `YYYY-MM-DD`, as RAWG reports it.
    pub released: Option<String>,
    pub rating: Option<f64>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
}

/// Full metadata for a single catalog game.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGameDetails {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`, as RAWG reports it.
    pub released: Option<String>,
    pub background_image: Option<String>,
    pub rating: Option<f64>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
}

// ---- RAWG wire format ----

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PlatformEntry {
    platform: Named,
}

#[derive(Debug, Deserialize)]
struct RawgGame {
    id: i64,
    name: String,
    #[serde(default)]
    slug: String,
    description_raw: Option<String>,
    released: Option<String>,
    background_image: Option<String>,
    rating: Option<f64>,
    platforms: Option<Vec<PlatformEntry>>,
    genres: Option<Vec<Named>>,
    developers: Option<Vec<Named>>,
    publishers: Option<Vec<Named>>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    results: Vec<RawgGame>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

fn names(items: Option<Vec<Named>>) -> Vec<String> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(|n| n.name)
        .collect()
}

fn platform_names(items: Option<Vec<PlatformEntry>>) -> Vec<String> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(|p| p.platform.name)
        .collect()
}

impl From<RawgGame> for CatalogGameSummary {
    fn from(game: RawgGame) -> Self {
        Self {
            id: game.id,
            name: game.name,
            slug: game.slug,
            background_image: game.background_image,
            released: game.released,
            rating: game.rating,
            platforms: platform_names(game.platforms),
            genres: names(game.genres),
        }
    }
}

impl From<RawgGame> for CatalogGameDetails {
    fn from(game: RawgGame) -> Self {
        Self {
            id: game.id,
            name: game.name,
            slug: game.slug,
            description: game.description_raw,
            released: game.released,
            background_image: game.background_image,
            rating: game.rating,
            platforms: platform_names(game.platforms),
            genres: names(game.genres),
            developers: names(game.developers),
            publishers: names(game.publishers),
        }
    }
}

impl RawgClient {
    /// Create a client with its own connection pool and request timeout.
    ///
    /// * `api_url` - Base URL, e.g. `https://api.rawg.io/api`.
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url, api_key))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Search the catalog by free text, returning at most [`SEARCH_PAGE_SIZE`] hits.
    pub async fn search(&self, query: &str) -> Result<Vec<CatalogGameSummary>, CatalogError> {
        let page_size = SEARCH_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(format!("{}/games", self.api_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("search", query),
                ("page_size", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let response = Self::ensure_success(response, "Failed to fetch from RAWG API").await?;
        let page = response
            .json::<SearchPage>()
            .await
            .map_err(reqwest::Error::without_url)?;
        Ok(page.results.into_iter().map(Into::into).collect())
    }

    /// Fetch full details for one catalog game.
    pub async fn game_details(&self, rawg_id: i64) -> Result<CatalogGameDetails, CatalogError> {
        let response = self
            .client
            .get(format!("{}/games/{}", self.api_url, rawg_id))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let response =
            Self::ensure_success(response, "Failed to fetch game details from RAWG API").await?;
        let game = response
            .json::<RawgGame>()
            .await
            .map_err(reqwest::Error::without_url)?;
        Ok(game.into())
    }

    /// Return the response unchanged on success, or a [`CatalogError::Api`]
    /// carrying RAWG's `detail` message (or `"{fallback} with status: N"`).
    async fn ensure_success(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = crate::read_error_body(response).await;
        let message = api_error_message(&body, status.as_u16(), fallback);
        tracing::warn!(status = status.as_u16(), %message, "RAWG API error");
        Err(CatalogError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pick the user-facing message for a failed RAWG call.
fn api_error_message(body: &str, status: u16, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("{fallback} with status: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS_JSON: &str = r#"{
        "id": 3498,
        "name": "Grand Theft Auto V",
        "slug": "grand-theft-auto-v",
        "description_raw": "Rockstar Games went bigger.",
        "released": "2013-09-17",
        "background_image": "https://media.rawg.io/media/games/gtav.jpg",
        "rating": 4.47,
        "platforms": [
            {"platform": {"id": 4, "name": "PC"}},
            {"platform": {"id": 187, "name": "PlayStation 5"}}
        ],
        "genres": [{"id": 4, "name": "Action"}],
        "developers": [{"id": 3524, "name": "Rockstar North"}],
        "publishers": [{"id": 2155, "name": "Rockstar Games"}]
    }"#;

    #[test]
    fn details_flatten_nested_names() {
        let raw: RawgGame = serde_json::from_str(DETAILS_JSON).unwrap();
        let details = CatalogGameDetails::from(raw);

        assert_eq!(details.id, 3498);
        assert_eq!(details.description.as_deref(), Some("Rockstar Games went bigger."));
        assert_eq!(details.platforms, vec!["PC", "PlayStation 5"]);
        assert_eq!(details.genres, vec!["Action"]);
        assert_eq!(details.developers, vec!["Rockstar North"]);
        assert_eq!(details.publishers, vec!["Rockstar Games"]);
    }

    #[test]
    fn missing_lists_become_empty() {
        let raw: RawgGame =
            serde_json::from_str(r#"{"id": 1, "name": "Obscure", "slug": "obscure"}"#).unwrap();
        let details = CatalogGameDetails::from(raw);

        assert!(details.platforms.is_empty());
        assert!(details.developers.is_empty());
        assert!(details.released.is_none());
        assert!(details.rating.is_none());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let raw: RawgGame = serde_json::from_str(DETAILS_JSON).unwrap();
        let json = serde_json::to_value(CatalogGameSummary::from(raw)).unwrap();

        assert_eq!(json["backgroundImage"], "https://media.rawg.io/media/games/gtav.jpg");
        assert_eq!(json["platforms"][0], "PC");
        assert!(json.get("developers").is_none());
    }

    #[test]
    fn error_message_prefers_detail() {
        let msg = api_error_message(r#"{"detail": "Not found."}"#, 404, "Failed");
        assert_eq!(msg, "Not found.");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        let msg = api_error_message("<html>bad gateway</html>", 502, "Failed to fetch game details from RAWG API");
        assert_eq!(msg, "Failed to fetch game details from RAWG API with status: 502");

        let msg = api_error_message(r#"{"error": "nope"}"#, 401, "Failed");
        assert_eq!(msg, "Failed with status: 401");
    }
}
