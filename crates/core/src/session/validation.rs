//! Input validation for session operations

use once_cell::sync::Lazy;
use regex::Regex;
use reciclo_domain::{RecicloError, Result};

static EMAIL_REGEX: Lazy<Result<Regex>> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .map_err(|e| RecicloError::Internal(format!("invalid email pattern: {e}")))
});

/// Check that `email` has the `local@domain.tld` shape
pub fn validate_email(email: &str) -> Result<()> {
    let regex = EMAIL_REGEX.as_ref().map_err(Clone::clone)?;
    if regex.is_match(email.trim()) {
        Ok(())
    } else {
        Err(RecicloError::InvalidInput(format!("invalid email address: '{email}'")))
    }
}

/// Check that a display name is not blank
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RecicloError::InvalidInput("name must not be empty".into()));
    }
    Ok(())
}
