//! HTTP clients for the services playlog depends on.
//!
//! - [`rawg`]: the RAWG game catalog (search and per-game details).
//! - [`completion`]: an OpenAI-compatible chat-completions endpoint used to
//!   draft solutions.
//!
//! Both clients are built once at startup with a bounded request timeout
//! and shared through the API state.

pub mod completion;
pub mod rawg;

/// Read a non-success response body, tolerating unreadable bodies.
async fn read_error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string())
}
