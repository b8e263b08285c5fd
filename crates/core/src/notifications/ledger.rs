//! Notification inbox and preference management

use std::sync::Arc;

use chrono::{NaiveTime, Utc};
use parking_lot::RwLock;
use reciclo_domain::notification::QUIET_HOURS_FORMAT;
use reciclo_domain::{
    NewNotification, NotificationPreferences, NotificationPriority, NotificationRecord,
    NotificationType, PreferencesUpdate, QuietHours, RecicloError, ReminderKind, Result,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ports::{NotificationPresenter, PreferencesRepository};

/// Inbox of notification records, newest first.
///
/// Records live only for the session. Preferences are loaded from and
/// saved to the [`PreferencesRepository`].
pub struct NotificationLedger {
    records: RwLock<Vec<NotificationRecord>>,
    preferences: Mutex<NotificationPreferences>,
    repository: Arc<dyn PreferencesRepository>,
    presenter: Arc<dyn NotificationPresenter>,
}

impl NotificationLedger {
    /// Create an empty ledger with default preferences. Call
    /// [`Self::load_preferences`] to pick up persisted ones.
    pub fn new(
        repository: Arc<dyn PreferencesRepository>,
        presenter: Arc<dyn NotificationPresenter>,
    ) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            preferences: Mutex::new(NotificationPreferences::default()),
            repository,
            presenter,
        }
    }

    /// Load persisted preferences. Corrupt or unreadable data falls back to
    /// defaults.
    pub async fn load_preferences(&self) -> NotificationPreferences {
        let loaded = match self.repository.load_preferences().await {
            Ok(Some(preferences)) => preferences,
            Ok(None) => NotificationPreferences::default(),
            Err(err) => {
                warn!(error = %err, "failed to load notification preferences, using defaults");
                NotificationPreferences::default()
            }
        };

        let mut guard = self.preferences.lock().await;
        *guard = loaded;
        guard.clone()
    }

    /// Prepend a new record and return it. High-priority records are also
    /// handed to the presenter.
    pub fn add(&self, notification: NewNotification) -> NotificationRecord {
        let NewNotification { kind, title, message, icon, priority, action_url } = notification;

        let record = NotificationRecord {
            id: Uuid::now_v7().to_string(),
            kind,
            title,
            message,
            icon: icon.unwrap_or_else(|| kind.default_icon().to_string()),
            created_at: Utc::now(),
            read: false,
            priority,
            action_url,
        };

        self.records.write().insert(0, record.clone());
        debug!(id = %record.id, kind = %record.kind, priority = %record.priority, "notification added");

        if record.priority == NotificationPriority::High {
            self.presenter.present(&record);
        }
        record
    }

    /// All records, newest first
    pub fn list(&self) -> Vec<NotificationRecord> {
        self.records.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<NotificationRecord> {
        self.records.read().iter().find(|n| n.id == id).cloned()
    }

    /// Number of unread records, counted on every call
    pub fn unread_count(&self) -> usize {
        self.records.read().iter().filter(|n| !n.read).count()
    }

    /// Returns whether a record with `id` existed
    pub fn mark_as_read(&self, id: &str) -> bool {
        let mut records = self.records.write();
        match records.iter_mut().find(|n| n.id == id) {
            Some(record) => {
                record.read = true;
                true
            }
            None => false,
        }
    }

    /// Returns how many records changed from unread to read
    pub fn mark_all_as_read(&self) -> usize {
        let mut records = self.records.write();
        let mut changed = 0;
        for record in records.iter_mut().filter(|n| !n.read) {
            record.read = true;
            changed += 1;
        }
        changed
    }

    /// Returns whether a record with `id` was removed
    pub fn delete(&self, id: &str) -> bool {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|n| n.id != id);
        records.len() != before
    }

    /// Returns how many records were removed
    pub fn clear_all(&self) -> usize {
        let mut records = self.records.write();
        let removed = records.len();
        records.clear();
        removed
    }

    /// Add a reminder notification for a scheduled `time`
    pub fn schedule_reminder(&self, kind: ReminderKind, time: &str) -> NotificationRecord {
        self.add(
            NewNotification::new(
                NotificationType::Reminder,
                kind.title(),
                format!("Agendado para {time}"),
            )
            .with_priority(NotificationPriority::Medium),
        )
    }

    pub async fn preferences(&self) -> NotificationPreferences {
        self.preferences.lock().await.clone()
    }

    /// Merge `update` into the current preferences and persist the result.
    ///
    /// Quiet-hour bounds must be `HH:MM`. Nothing changes if validation or
    /// the save fails.
    pub async fn update_preferences(
        &self,
        update: PreferencesUpdate,
    ) -> Result<NotificationPreferences> {
        if let Some(quiet_hours) = &update.quiet_hours {
            validate_quiet_hours(quiet_hours)?;
        }

        let mut guard = self.preferences.lock().await;
        let mut next = guard.clone();
        next.merge(update);

        self.repository.save_preferences(&next).await?;
        *guard = next.clone();

        info!("notification preferences updated");
        Ok(next)
    }
}

fn validate_quiet_hours(quiet_hours: &QuietHours) -> Result<()> {
    for (field, value) in [("start", &quiet_hours.start), ("end", &quiet_hours.end)] {
        NaiveTime::parse_from_str(value, QUIET_HOURS_FORMAT).map_err(|_| {
            RecicloError::InvalidInput(format!("quiet hours {field} must be HH:MM, got '{value}'"))
        })?;
    }
    Ok(())
}
