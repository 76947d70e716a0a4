//! Request extractors whose rejections use the standard JSON error body.
//!
//! Axum's own `Json`/`Query` reject with plain text and a 422 for
//! well-formed-but-invalid payloads. These wrappers route every rejection
//! through [`AppError::BadRequest`] instead, so clients always get a 400
//! with `{ "error", "code" }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
