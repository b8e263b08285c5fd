//! Port interfaces for stats persistence
//!
//! These traits define the boundary between the stats store and the
//! client-local storage implementation.

use async_trait::async_trait;
use reciclo_domain::{Result, StatsRecord};

/// Persistence for per-profile stats records
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Load the record stored for `profile_id`.
    ///
    /// Returns `Ok(None)` when nothing is stored and
    /// `Err(RecicloError::MalformedPersistedState)` when stored bytes cannot
    /// be decoded.
    async fn load(&self, profile_id: &str) -> Result<Option<StatsRecord>>;

    /// Overwrite the record for `profile_id`. Must be durable on return.
    async fn save(&self, profile_id: &str, record: &StatsRecord) -> Result<()>;
}
