//! Port interfaces for notifications

use async_trait::async_trait;
use reciclo_domain::{NotificationPreferences, NotificationRecord, Result};

/// Persistence for app-wide notification preferences
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// `Ok(None)` when never saved; `MalformedPersistedState` when corrupt
    async fn load_preferences(&self) -> Result<Option<NotificationPreferences>>;

    async fn save_preferences(&self, preferences: &NotificationPreferences) -> Result<()>;
}

/// Toast/alert collaborator signalled for high-priority notifications
pub trait NotificationPresenter: Send + Sync {
    fn present(&self, record: &NotificationRecord);
}
