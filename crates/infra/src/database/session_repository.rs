//! Session persistence under the fixed session key

use async_trait::async_trait;
use reciclo_core::SessionRepository as SessionRepositoryPort;
use reciclo_domain::constants::SESSION_KEY;
use reciclo_domain::{Result as DomainResult, UserProfile};

use super::kv_store::KvStore;

/// SQLite-backed implementation of `SessionRepository`
pub struct SqliteSessionRepository {
    kv: KvStore,
}

impl SqliteSessionRepository {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl SessionRepositoryPort for SqliteSessionRepository {
    async fn load_session(&self) -> DomainResult<Option<UserProfile>> {
        self.kv.get_json(SESSION_KEY).await
    }

    async fn save_session(&self, profile: &UserProfile) -> DomainResult<()> {
        self.kv.set_json(SESSION_KEY, profile).await
    }

    async fn clear_session(&self) -> DomainResult<()> {
        self.kv.remove(SESSION_KEY).await.map(|_| ())
    }
}
