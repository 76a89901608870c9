use crate::errors::AppError;
use regex::Regex;
use std::sync::LazyLock;

// RFC 5322 simplified: local@domain.tld
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("valid email regex")
});

/// Rejects a required text field that is empty or whitespace only.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "field '{}' must not be empty",
            field
        )));
    }
    Ok(())
}

/// Returns true when `email` looks like `local@domain.tld`.
///
/// Only consulted when strict email validation is switched on; by default
/// leads are stored with whatever non-empty email the form sent.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.len() < 5 || email.len() > 254 {
        return false;
    }
    EMAIL_SHAPE.is_match(email)
}
