//! Local stand-in for an account backend.
//!
//! Accepts every (already validated) credential pair and fabricates a
//! profile after an optional artificial delay.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reciclo_core::Authenticator;
use reciclo_domain::constants::DEFAULT_AVATAR_URL;
use reciclo_domain::{
    Credentials, ProfilePreferences, Registration, Result as DomainResult, SessionConfig,
    UserProfile,
};
use tracing::debug;
use uuid::Uuid;

const LOGIN_DISPLAY_NAME: &str = "Usuário Eco";

#[derive(Debug, Clone, Default)]
pub struct StubAuthenticator {
    latency: Duration,
}

impl StubAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(Duration::from_millis(config.simulated_latency_ms))
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            debug!(latency_ms = self.latency.as_millis() as u64, "simulating auth round trip");
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn fabricate_profile(name: &str, email: &str) -> UserProfile {
    let now = Utc::now();
    UserProfile {
        id: Uuid::now_v7().to_string(),
        name: name.to_string(),
        email: email.trim().to_string(),
        phone: None,
        avatar_url: Some(DEFAULT_AVATAR_URL.to_string()),
        objective: String::new(),
        preferences: ProfilePreferences::default(),
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> DomainResult<UserProfile> {
        self.simulate_round_trip().await;
        Ok(fabricate_profile(LOGIN_DISPLAY_NAME, &credentials.email))
    }

    async fn create_account(&self, registration: &Registration) -> DomainResult<UserProfile> {
        self.simulate_round_trip().await;

        let mut profile = fabricate_profile(registration.name.trim(), &registration.email);
        profile.phone = registration.phone.clone().filter(|p| !p.trim().is_empty());
        profile.objective = registration.objective.clone().unwrap_or_default();
        Ok(profile)
    }
}
