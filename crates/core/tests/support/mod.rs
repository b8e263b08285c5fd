//! Shared test helpers for `reciclo-core` integration tests.
//!
//! In-memory mocks for every core port plus a fixture that wires the
//! services together the way the application does.

#![allow(dead_code)]

pub mod repositories;

use std::sync::Arc;

use reciclo_core::{EventIntake, NotificationLedger, ProgressionRules, SessionStore, StatsStore};
use reciclo_domain::{GamificationConfig, Registration};

pub use repositories::{
    MockAuthenticator, MockPreferencesRepository, MockSessionRepository, MockStatsRepository,
    RecordingPresenter,
};

/// Fully wired services backed by in-memory mocks
pub struct Harness {
    pub stats_repo: Arc<MockStatsRepository>,
    pub session_repo: Arc<MockSessionRepository>,
    pub prefs_repo: Arc<MockPreferencesRepository>,
    pub presenter: Arc<RecordingPresenter>,
    pub stats: Arc<StatsStore>,
    pub ledger: Arc<NotificationLedger>,
    pub session: SessionStore,
    pub intake: EventIntake,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(GamificationConfig::default())
    }

    pub fn with_config(config: GamificationConfig) -> Self {
        Self::with_stats_repo(config, Arc::new(MockStatsRepository::default()))
    }

    pub fn with_stats_repo(config: GamificationConfig, stats_repo: Arc<MockStatsRepository>) -> Self {
        let session_repo = Arc::new(MockSessionRepository::default());
        let prefs_repo = Arc::new(MockPreferencesRepository::default());
        let presenter = Arc::new(RecordingPresenter::default());

        let stats = Arc::new(StatsStore::new(
            stats_repo.clone(),
            ProgressionRules::from_config(&config),
        ));
        let ledger = Arc::new(NotificationLedger::new(prefs_repo.clone(), presenter.clone()));
        let session = SessionStore::new(
            session_repo.clone(),
            Arc::new(MockAuthenticator::default()),
            stats.clone(),
        );
        let intake = EventIntake::new(stats.clone(), ledger.clone(), config);

        Self { stats_repo, session_repo, prefs_repo, presenter, stats, ledger, session, intake }
    }
}

pub fn registration(password: &str) -> Registration {
    Registration {
        name: "Ana Souza".into(),
        email: "ana@reciclo.com".into(),
        phone: None,
        password: password.into(),
        confirm_password: password.into(),
        objective: Some("Reciclar mais".into()),
    }
}
