//! Notification inbox and delivery preference types

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_QUIET_HOURS_END, DEFAULT_QUIET_HOURS_START};
use crate::impl_domain_status_conversions;

/// Wall-clock format used for quiet hours
pub const QUIET_HOURS_FORMAT: &str = "%H:%M";

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Reward,
    Challenge,
    Community,
    Education,
    Reminder,
    Other,
}

impl_domain_status_conversions!(NotificationType {
    Reward => "reward",
    Challenge => "challenge",
    Community => "community",
    Education => "education",
    Reminder => "reminder",
    Other => "other",
});

impl NotificationType {
    /// Glyph used when the sender does not provide one
    pub fn default_icon(&self) -> &'static str {
        match self {
            Self::Reward => "🎁",
            Self::Challenge => "🏆",
            Self::Community => "🌟",
            Self::Education => "📚",
            Self::Reminder => "⏰",
            Self::Other => "🔔",
        }
    }
}

/// Delivery priority. `High` is also surfaced as a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl_domain_status_conversions!(NotificationPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Inbox entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    #[serde(default)]
    pub priority: NotificationPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

/// Notification submitted to the ledger; id, timestamp and read flag are
/// assigned on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub priority: NotificationPriority,
    #[serde(default)]
    pub action_url: Option<String>,
}

impl NewNotification {
    pub fn new(kind: NotificationType, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            icon: None,
            priority: NotificationPriority::default(),
            action_url: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_priority(mut self, priority: NotificationPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_action(mut self, action_url: impl Into<String>) -> Self {
        self.action_url = Some(action_url.into());
        self
    }
}

/// Reminder presets offered on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Daily,
    Weekly,
    Challenge,
}

impl_domain_status_conversions!(ReminderKind {
    Daily => "daily",
    Weekly => "weekly",
    Challenge => "challenge",
});

impl ReminderKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Daily => "Lembrete diário de coleta",
            Self::Weekly => "Resumo semanal",
            Self::Challenge => "Lembrete de desafio",
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Preferences */
/* -------------------------------------------------------------------------- */

/// Delivery preferences, persisted app-wide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub push: bool,
    pub email: bool,
    pub sms: bool,
    pub collect_reminders: bool,
    pub challenge_updates: bool,
    pub community_activity: bool,
    pub promotions: bool,
    pub educational_content: bool,
    pub quiet_hours: QuietHours,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            push: true,
            email: true,
            sms: false,
            collect_reminders: true,
            challenge_updates: true,
            community_activity: true,
            promotions: true,
            educational_content: true,
            quiet_hours: QuietHours::default(),
        }
    }
}

impl NotificationPreferences {
    /// Shallow merge: every field present in `update` replaces the current
    /// value, including `quiet_hours` as a whole.
    pub fn merge(&mut self, update: PreferencesUpdate) {
        let PreferencesUpdate {
            push,
            email,
            sms,
            collect_reminders,
            challenge_updates,
            community_activity,
            promotions,
            educational_content,
            quiet_hours,
        } = update;

        if let Some(v) = push {
            self.push = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = sms {
            self.sms = v;
        }
        if let Some(v) = collect_reminders {
            self.collect_reminders = v;
        }
        if let Some(v) = challenge_updates {
            self.challenge_updates = v;
        }
        if let Some(v) = community_activity {
            self.community_activity = v;
        }
        if let Some(v) = promotions {
            self.promotions = v;
        }
        if let Some(v) = educational_content {
            self.educational_content = v;
        }
        if let Some(v) = quiet_hours {
            self.quiet_hours = v;
        }
    }
}

/// Partial preferences update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesUpdate {
    pub push: Option<bool>,
    pub email: Option<bool>,
    pub sms: Option<bool>,
    pub collect_reminders: Option<bool>,
    pub challenge_updates: Option<bool>,
    pub community_activity: Option<bool>,
    pub promotions: Option<bool>,
    pub educational_content: Option<bool>,
    pub quiet_hours: Option<QuietHours>,
}

/// Quiet-hours window in local `HH:MM`. Descriptive only: suppression is
/// the delivery collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuietHours {
    pub enabled: bool,
    pub start: String,
    pub end: String,
}

impl Default for QuietHours {
    fn default() -> Self {
        Self {
            enabled: false,
            start: DEFAULT_QUIET_HOURS_START.to_string(),
            end: DEFAULT_QUIET_HOURS_END.to_string(),
        }
    }
}

impl QuietHours {
    /// Parse both bounds, returning `None` when either is not `HH:MM`.
    pub fn bounds(&self) -> Option<(NaiveTime, NaiveTime)> {
        let start = NaiveTime::parse_from_str(&self.start, QUIET_HOURS_FORMAT).ok()?;
        let end = NaiveTime::parse_from_str(&self.end, QUIET_HOURS_FORMAT).ok()?;
        Some((start, end))
    }

    /// Whether `time` falls in an enabled window. Windows may wrap midnight;
    /// the start is inclusive and the end exclusive.
    pub fn contains(&self, time: NaiveTime) -> bool {
        if !self.enabled {
            return false;
        }
        match self.bounds() {
            Some((start, end)) if start <= end => time >= start && time < end,
            Some((start, end)) => time >= start || time < end,
            None => false,
        }
    }
}
