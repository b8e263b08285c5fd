//! Stats persistence, one JSON record per profile

use async_trait::async_trait;
use reciclo_core::StatsRepository as StatsRepositoryPort;
use reciclo_domain::constants::stats_key;
use reciclo_domain::{Result as DomainResult, StatsRecord};

use super::kv_store::KvStore;

/// SQLite-backed implementation of `StatsRepository`
pub struct SqliteStatsRepository {
    kv: KvStore,
}

impl SqliteStatsRepository {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl StatsRepositoryPort for SqliteStatsRepository {
    async fn load(&self, profile_id: &str) -> DomainResult<Option<StatsRecord>> {
        self.kv.get_json(&stats_key(profile_id)).await
    }

    async fn save(&self, profile_id: &str, record: &StatsRecord) -> DomainResult<()> {
        self.kv.set_json(&stats_key(profile_id), record).await
    }
}
