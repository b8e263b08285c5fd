//! Mock repository implementations for testing
//!
//! In-memory mocks for the core ports. Each can be switched into a failure
//! mode to exercise corruption and storage-error paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use reciclo_core::{
    Authenticator, NotificationPresenter, PreferencesRepository, SessionRepository,
    StatsRepository,
};
use reciclo_domain::{
    Credentials, NotificationPreferences, NotificationRecord, RecicloError, Registration,
    Result as DomainResult, StatsRecord, UserProfile,
};
use uuid::Uuid;

/// In-memory `StatsRepository` keyed by profile id.
#[derive(Default)]
pub struct MockStatsRepository {
    records: Mutex<HashMap<String, StatsRecord>>,
    corrupt: Mutex<Vec<String>>,
    fail_saves: Mutex<bool>,
    fail_loads: Mutex<bool>,
    saves: AtomicUsize,
}

impl MockStatsRepository {
    /// Make `load` report corrupt data for `profile_id`
    pub fn mark_corrupt(&self, profile_id: &str) {
        self.corrupt.lock().push(profile_id.to_string());
    }

    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock() = fail;
    }

    /// Make `load` fail with a storage error for every profile
    pub fn set_fail_loads(&self, fail: bool) {
        *self.fail_loads.lock() = fail;
    }

    pub fn seed(&self, profile_id: &str, record: StatsRecord) {
        self.records.lock().insert(profile_id.to_string(), record);
    }

    pub fn stored(&self, profile_id: &str) -> Option<StatsRecord> {
        self.records.lock().get(profile_id).cloned()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsRepository for MockStatsRepository {
    async fn load(&self, profile_id: &str) -> DomainResult<Option<StatsRecord>> {
        if *self.fail_loads.lock() {
            return Err(RecicloError::Database("database is locked".into()));
        }
        if self.corrupt.lock().iter().any(|id| id == profile_id) {
            return Err(RecicloError::MalformedPersistedState(format!(
                "stats for {profile_id} are not valid JSON"
            )));
        }
        Ok(self.records.lock().get(profile_id).cloned())
    }

    async fn save(&self, profile_id: &str, record: &StatsRecord) -> DomainResult<()> {
        if *self.fail_saves.lock() {
            return Err(RecicloError::Database("disk full".into()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.records.lock().insert(profile_id.to_string(), record.clone());
        Ok(())
    }
}

/// In-memory `SessionRepository`.
#[derive(Default)]
pub struct MockSessionRepository {
    profile: Mutex<Option<UserProfile>>,
    corrupt: Mutex<bool>,
    fail_saves: Mutex<bool>,
}

impl MockSessionRepository {
    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock() = fail;
    }

    pub fn set_corrupt(&self, corrupt: bool) {
        *self.corrupt.lock() = corrupt;
    }

    pub fn stored(&self) -> Option<UserProfile> {
        self.profile.lock().clone()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn load_session(&self) -> DomainResult<Option<UserProfile>> {
        if *self.corrupt.lock() {
            return Err(RecicloError::MalformedPersistedState("session is not valid JSON".into()));
        }
        Ok(self.profile.lock().clone())
    }

    async fn save_session(&self, profile: &UserProfile) -> DomainResult<()> {
        if *self.fail_saves.lock() {
            return Err(RecicloError::Database("disk full".into()));
        }
        *self.profile.lock() = Some(profile.clone());
        Ok(())
    }

    async fn clear_session(&self) -> DomainResult<()> {
        *self.profile.lock() = None;
        Ok(())
    }
}

/// In-memory `PreferencesRepository`.
#[derive(Default)]
pub struct MockPreferencesRepository {
    preferences: Mutex<Option<NotificationPreferences>>,
}

impl MockPreferencesRepository {
    pub fn stored(&self) -> Option<NotificationPreferences> {
        self.preferences.lock().clone()
    }
}

#[async_trait]
impl PreferencesRepository for MockPreferencesRepository {
    async fn load_preferences(&self) -> DomainResult<Option<NotificationPreferences>> {
        Ok(self.preferences.lock().clone())
    }

    async fn save_preferences(&self, preferences: &NotificationPreferences) -> DomainResult<()> {
        *self.preferences.lock() = Some(preferences.clone());
        Ok(())
    }
}

/// Authenticator that accepts everyone and fabricates a profile.
#[derive(Default)]
pub struct MockAuthenticator;

fn fabricate(name: &str, email: &str) -> UserProfile {
    let now = Utc::now();
    UserProfile {
        id: Uuid::now_v7().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        avatar_url: None,
        objective: String::new(),
        preferences: Default::default(),
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> DomainResult<UserProfile> {
        Ok(fabricate("Usuário", &credentials.email))
    }

    async fn create_account(&self, registration: &Registration) -> DomainResult<UserProfile> {
        let mut profile = fabricate(&registration.name, &registration.email);
        profile.phone = registration.phone.clone();
        profile.objective = registration.objective.clone().unwrap_or_default();
        Ok(profile)
    }
}

/// Presenter that records the titles it was asked to show.
#[derive(Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<String>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().clone()
    }
}

impl NotificationPresenter for RecordingPresenter {
    fn present(&self, record: &NotificationRecord) {
        self.shown.lock().push(record.title.clone());
    }
}
