use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use playlog_core::error::CoreError;
use playlog_upstream::completion::CompletionError;
use playlog_upstream::rawg::CatalogError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, the upstream client errors, and
/// adds HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent `{ "error", "code" }` JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `playlog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The RAWG catalog call failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The text-completion call failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Upstream errors ---
            AppError::Catalog(err) => match err {
                CatalogError::Api { message, .. } => {
                    (StatusCode::BAD_REQUEST, "DEPENDENCY_ERROR", message.clone())
                }
                CatalogError::Unusable(msg) => {
                    tracing::error!(error = %msg, "Game catalog returned unusable data");
                    (StatusCode::INTERNAL_SERVER_ERROR, "DEPENDENCY_ERROR", msg.clone())
                }
                CatalogError::Request(e) => {
                    tracing::error!(error = %e, "Game catalog request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DEPENDENCY_ERROR",
                        "Game catalog request failed".to_string(),
                    )
                }
            },
            AppError::Completion(err) => match err {
                CompletionError::Api { message, .. } => {
                    (StatusCode::BAD_REQUEST, "DEPENDENCY_ERROR", message.clone())
                }
                CompletionError::EmptyCompletion => {
                    tracing::error!("Text completion returned no content");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DEPENDENCY_ERROR",
                        err.to_string(),
                    )
                }
                CompletionError::Request(e) => {
                    tracing::error!(error = %e, "Text completion request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DEPENDENCY_ERROR",
                        "Text completion request failed".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign-key violations (a referenced row is missing) map to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            if db_err.is_foreign_key_violation() {
                return (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Referenced resource not found".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::Value;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_entity() {
        let (status, body) = render(CoreError::NotFound { entity: "Game", id: 4 }.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["error"], "Game with id 4 not found");
    }

    #[tokio::test]
    async fn validation_and_conflict_keep_message() {
        let (status, body) = render(CoreError::Validation("name is required.".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"], "name is required.");

        let (status, body) = render(CoreError::Conflict("taken".into()).into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn upstream_rejection_is_bad_request_with_upstream_message() {
        let err = CatalogError::Api {
            status: 404,
            message: "Not found.".into(),
        };
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "DEPENDENCY_ERROR");
        assert_eq!(body["error"], "Not found.");
    }

    #[tokio::test]
    async fn unusable_catalog_data_is_dependency_error() {
        let err = CatalogError::Unusable("RAWG game 9 has no name".into());
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DEPENDENCY_ERROR");
        assert_eq!(body["error"], "RAWG game 9 has no name");
    }

    #[tokio::test]
    async fn empty_completion_is_server_error() {
        let (status, body) = render(CompletionError::EmptyCompletion.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DEPENDENCY_ERROR");
        assert_eq!(body["error"], "Failed to generate AI solution");
    }

    #[tokio::test]
    async fn internal_details_are_sanitized() {
        let (status, body) = render(CoreError::Internal("pool exploded".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"], "An internal error occurred");

        let (status, _) = render(sqlx::Error::PoolTimedOut.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = render(sqlx::Error::RowNotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
