//! App-wide notification preference persistence

use async_trait::async_trait;
use reciclo_core::PreferencesRepository as PreferencesRepositoryPort;
use reciclo_domain::constants::NOTIFICATION_PREFS_KEY;
use reciclo_domain::{NotificationPreferences, Result as DomainResult};

use super::kv_store::KvStore;

/// SQLite-backed implementation of `PreferencesRepository`
pub struct SqlitePreferencesRepository {
    kv: KvStore,
}

impl SqlitePreferencesRepository {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl PreferencesRepositoryPort for SqlitePreferencesRepository {
    async fn load_preferences(&self) -> DomainResult<Option<NotificationPreferences>> {
        self.kv.get_json(NOTIFICATION_PREFS_KEY).await
    }

    async fn save_preferences(&self, preferences: &NotificationPreferences) -> DomainResult<()> {
        self.kv.set_json(NOTIFICATION_PREFS_KEY, preferences).await
    }
}
