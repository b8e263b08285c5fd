//! Session store - owns the active profile and its lifecycle

use std::sync::Arc;

use chrono::Utc;
use reciclo_domain::{
    Credentials, ProfileUpdate, RecicloError, Registration, Result, UserProfile,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::password::PasswordStrength;
use super::ports::{Authenticator, SessionRepository};
use super::validation::{validate_email, validate_name};
use crate::stats::StatsStore;

/// Session store.
///
/// Login and registration go through the [`Authenticator`]; the resulting
/// profile is persisted through the [`SessionRepository`] and the
/// [`StatsStore`] is loaded for it before the call returns.
pub struct SessionStore {
    repository: Arc<dyn SessionRepository>,
    authenticator: Arc<dyn Authenticator>,
    stats: Arc<StatsStore>,
    current: RwLock<Option<UserProfile>>,
}

impl SessionStore {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        authenticator: Arc<dyn Authenticator>,
        stats: Arc<StatsStore>,
    ) -> Self {
        Self { repository, authenticator, stats, current: RwLock::new(None) }
    }

    /// Active profile, if logged in
    pub async fn current_profile(&self) -> Option<UserProfile> {
        self.current.read().await.clone()
    }

    /// Resume the persisted session, if any.
    ///
    /// A corrupt session record is logged and treated as logged out.
    pub async fn restore(&self) -> Result<Option<UserProfile>> {
        let profile = match self.repository.load_session().await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                debug!("no persisted session");
                return Ok(None);
            }
            Err(RecicloError::MalformedPersistedState(reason)) => {
                warn!(%reason, "persisted session is corrupt, starting logged out");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        self.stats.load(&profile.id).await?;
        *self.current.write().await = Some(profile.clone());
        info!(profile_id = %profile.id, "session restored");
        Ok(Some(profile))
    }

    /// Log in with `credentials`. The profile's stats are loaded before this
    /// returns.
    pub async fn login(&self, credentials: Credentials) -> Result<UserProfile> {
        validate_email(&credentials.email)?;

        let profile = self.authenticator.authenticate(&credentials).await?;
        self.stats.load(&profile.id).await?;
        self.persist_session(&profile).await?;

        *self.current.write().await = Some(profile.clone());
        info!(profile_id = %profile.id, "logged in");
        Ok(profile)
    }

    /// Create an account with zeroed stats and make it the active session
    pub async fn register(&self, registration: Registration) -> Result<UserProfile> {
        validate_name(&registration.name)?;
        validate_email(&registration.email)?;

        if registration.password != registration.confirm_password {
            return Err(RecicloError::InvalidInput("passwords do not match".into()));
        }

        let strength = PasswordStrength::evaluate(&registration.password);
        if !strength.is_acceptable() {
            return Err(RecicloError::WeakPassword(format!(
                "password strength '{}' ({}/5) is below the minimum",
                strength.label, strength.score
            )));
        }

        let profile = self.authenticator.create_account(&registration).await?;
        self.stats.init_fresh(&profile.id).await?;
        self.persist_session(&profile).await?;

        *self.current.write().await = Some(profile.clone());
        info!(profile_id = %profile.id, "registered new profile");
        Ok(profile)
    }

    /// Save `profile` as the session once its stats are active. On failure
    /// the stats store goes back to the previous session's profile.
    async fn persist_session(&self, profile: &UserProfile) -> Result<()> {
        let Err(err) = self.repository.save_session(profile).await else {
            return Ok(());
        };

        let previous = self.current.read().await.as_ref().map(|p| p.id.clone());
        match previous {
            Some(previous_id) => {
                if let Err(reload_err) = self.stats.load(&previous_id).await {
                    warn!(profile_id = %previous_id, error = %reload_err, "could not reload previous stats");
                    self.stats.teardown().await;
                }
            }
            None => self.stats.teardown().await,
        }
        warn!(profile_id = %profile.id, error = %err, "session not saved, rolled back");
        Err(err)
    }

    /// Clear the persisted session and reset the active profile's stats
    pub async fn logout(&self) -> Result<()> {
        let mut current = self.current.write().await;

        self.repository.clear_session().await?;
        if self.stats.active_profile_id().await.is_some() {
            self.stats.reset().await?;
        }
        self.stats.teardown().await;

        if let Some(profile) = current.take() {
            info!(profile_id = %profile.id, "logged out");
        }
        Ok(())
    }

    /// Merge `update` into the active profile and persist it
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }

        let mut current = self.current.write().await;
        let mut profile = current
            .clone()
            .ok_or_else(|| RecicloError::ProfileNotFound("no active session".into()))?;

        profile.apply(update);
        profile.updated_at = Utc::now();
        self.repository.save_session(&profile).await?;

        *current = Some(profile.clone());
        debug!(profile_id = %profile.id, "profile updated");
        Ok(profile)
    }
}
