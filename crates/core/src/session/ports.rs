//! Port interfaces for session management
//!
//! The session repository persists the active profile under the fixed
//! session key. The authenticator stands in for a real backend.

use async_trait::async_trait;
use reciclo_domain::{Credentials, Registration, Result, UserProfile};

/// Persistence for the active session's profile
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// `Ok(None)` when logged out; `MalformedPersistedState` when corrupt
    async fn load_session(&self) -> Result<Option<UserProfile>>;

    async fn save_session(&self, profile: &UserProfile) -> Result<()>;

    async fn clear_session(&self) -> Result<()>;
}

/// Account backend.
///
/// Inputs have already been validated by the session store when these are
/// called.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve credentials to a profile
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserProfile>;

    /// Create a new account and return its profile
    async fn create_account(&self, registration: &Registration) -> Result<UserProfile>;
}
