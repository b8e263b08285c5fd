//! Domain types and models

pub mod material;
pub mod notification;
pub mod stats;
pub mod user;

pub use material::MaterialKind;
pub use notification::{
    NewNotification, NotificationPreferences, NotificationPriority, NotificationRecord,
    NotificationType, PreferencesUpdate, QuietHours, ReminderKind,
};
pub use stats::{
    AchievementId, AchievementProgress, ChallengeProgress, GamificationStats, Milestone, Rank,
    StatsRecord,
};
pub use user::{Credentials, ProfilePreferences, ProfileUpdate, Registration, UserProfile};
