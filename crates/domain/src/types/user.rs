//! User profile types
//!
//! The profile is created at registration (or fabricated by the login stub)
//! and persisted under the session key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile stored in client-local storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Free-text objective shown on the profile page
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub preferences: ProfilePreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Merge a partial update into this profile.
    ///
    /// Only fields present in `update` are touched. `updated_at` is bumped
    /// by the caller.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(objective) = update.objective {
            self.objective = objective;
        }
        if let Some(preferences) = update.preferences {
            self.preferences = preferences;
        }
    }
}

/// Account-level toggles chosen at sign-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePreferences {
    pub notifications: bool,
    pub newsletter: bool,
    pub public_profile: bool,
}

impl Default for ProfilePreferences {
    fn default() -> Self {
        Self { notifications: true, newsletter: true, public_profile: true }
    }
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub objective: Option<String>,
}

/// Partial profile update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub objective: Option<String>,
    pub preferences: Option<ProfilePreferences>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        let now = Utc::now();
        UserProfile {
            id: "p-1".into(),
            name: "Julia".into(),
            email: "julia@example.com".into(),
            phone: None,
            avatar_url: None,
            objective: "Reciclar mais".into(),
            preferences: ProfilePreferences::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut p = profile();
        p.apply(ProfileUpdate { phone: Some("+55 11 9999".into()), ..Default::default() });

        assert_eq!(p.name, "Julia");
        assert_eq!(p.phone.as_deref(), Some("+55 11 9999"));
        assert_eq!(p.objective, "Reciclar mais");
    }

    #[test]
    fn legacy_json_without_optional_fields_parses() {
        let json = r#"{
            "id": "123456",
            "name": "Usuário Eco",
            "email": "eco@example.com",
            "created_at": "2024-01-15T10:00:00Z",
            "updated_at": "2024-01-15T10:00:00Z"
        }"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.objective, "");
        assert!(p.preferences.newsletter);
        assert!(p.avatar_url.is_none());
    }
}
