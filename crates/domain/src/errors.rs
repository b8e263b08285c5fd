//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Reciclo
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RecicloError {
    /// Material kind not present in the rate table
    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    /// Item count was zero, negative, or overflowed the point computation
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Password scored below the registration minimum
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// Persisted JSON could not be decoded. Recovered locally by stores.
    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),

    /// No active session for the requested profile
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecicloError {
    /// Validation failures are expected to surface as a user-visible toast.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidMaterial(_)
                | Self::InvalidQuantity(_)
                | Self::WeakPassword(_)
                | Self::InvalidInput(_)
        )
    }
}

/// Result type alias for Reciclo operations
pub type Result<T> = std::result::Result<T, RecicloError>;
