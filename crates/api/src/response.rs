//! Shared response types for API handlers.

use serde::Serialize;

/// `{ "success": true }` acknowledgment returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
