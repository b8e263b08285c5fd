//! Structured command logging and stable error labels

use std::time::Duration;

use reciclo_domain::RecicloError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `RecicloError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &RecicloError) -> &'static str {
    match error {
        RecicloError::InvalidMaterial(_) => "invalid_material",
        RecicloError::InvalidQuantity(_) => "invalid_quantity",
        RecicloError::WeakPassword(_) => "weak_password",
        RecicloError::MalformedPersistedState(_) => "malformed_persisted_state",
        RecicloError::ProfileNotFound(_) => "profile_not_found",
        RecicloError::InvalidInput(_) => "invalid_input",
        RecicloError::Auth(_) => "auth",
        RecicloError::Database(_) => "database",
        RecicloError::Config(_) => "config",
        RecicloError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&RecicloError::WeakPassword("x".into())), "weak_password");
        assert_eq!(error_label(&RecicloError::ProfileNotFound("x".into())), "profile_not_found");
        assert_eq!(error_label(&RecicloError::Database("x".into())), "database");
    }
}
