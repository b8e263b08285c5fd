//! Application context - dependency injection container

use std::sync::Arc;

use reciclo_core::{
    EventIntake, NotificationLedger, NotificationPresenter, ProgressionRules, SessionStore,
    StatsStore,
};
use reciclo_domain::{Config, RecicloError, Result, UserProfile};
use reciclo_infra::{
    DbManager, KvStore, SqlitePreferencesRepository, SqliteSessionRepository,
    SqliteStatsRepository, StubAuthenticator, TracingPresenter,
};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub stats: Arc<StatsStore>,
    pub ledger: Arc<NotificationLedger>,
    pub session: Arc<SessionStore>,
    pub intake: Arc<EventIntake>,
}

impl AppContext {
    /// Open storage described by `config` and wire every service with the
    /// default presenter.
    pub async fn new(config: Config) -> Result<Self> {
        Self::with_presenter(config, Arc::new(TracingPresenter)).await
    }

    /// Like [`Self::new`] with a custom toast presenter
    pub async fn with_presenter(
        config: Config,
        presenter: Arc<dyn NotificationPresenter>,
    ) -> Result<Self> {
        let storage = config.storage.clone();
        let db = tokio::task::spawn_blocking(move || -> Result<DbManager> {
            let db = DbManager::from_config(&storage)?;
            db.run_migrations()?;
            Ok(db)
        })
        .await
        .map_err(|e| RecicloError::Internal(format!("database startup task failed: {e}")))??;
        let db = Arc::new(db);
        let kv = KvStore::new(Arc::clone(&db));

        let stats = Arc::new(StatsStore::new(
            Arc::new(SqliteStatsRepository::new(kv.clone())),
            ProgressionRules::from_config(&config.gamification),
        ));
        let ledger = Arc::new(NotificationLedger::new(
            Arc::new(SqlitePreferencesRepository::new(kv.clone())),
            presenter,
        ));
        ledger.load_preferences().await;

        let session = Arc::new(SessionStore::new(
            Arc::new(SqliteSessionRepository::new(kv)),
            Arc::new(StubAuthenticator::from_config(&config.session)),
            Arc::clone(&stats),
        ));
        let intake = Arc::new(EventIntake::new(
            Arc::clone(&stats),
            Arc::clone(&ledger),
            config.gamification.clone(),
        ));

        info!(db_path = %db.path().display(), "application context ready");

        Ok(Self { config, db, stats, ledger, session, intake })
    }

    /// Resume the persisted session, if any
    pub async fn restore_session(&self) -> Result<Option<UserProfile>> {
        self.session.restore().await
    }

    /// Active profile, or `ProfileNotFound` when logged out
    pub async fn require_profile(&self) -> Result<UserProfile> {
        self.session
            .current_profile()
            .await
            .ok_or_else(|| RecicloError::ProfileNotFound("no active session".into()))
    }
}
