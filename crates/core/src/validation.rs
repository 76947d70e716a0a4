//! Request field validators shared by every handler group.

use url::Url;

use crate::error::CoreError;
use crate::types::DbId;

/// Validate that a required text field is present and not blank.
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required.")));
    }
    Ok(())
}

/// Validate that an identifier supplied by a client is a positive integer.
pub fn validate_positive_id(field: &str, id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got {id}"
        )));
    }
    Ok(())
}

/// Validate an optional image URL. Absent is fine; present must be an
/// `http`/`https` URL with a host.
pub fn validate_image_url(url: Option<&str>) -> Result<(), CoreError> {
    let Some(raw) = url else {
        return Ok(());
    };
    let invalid = || {
        CoreError::Validation(format!(
            "imageUrl must be an absolute http(s) URL, got '{raw}'"
        ))
    };

    let parsed = Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host().is_none() {
        return Err(invalid());
    }
    Ok(())
}
