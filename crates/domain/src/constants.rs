//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Progression
pub const DEFAULT_LEVEL_SIZE: u64 = 300;

// Point rates per recycled unit
pub const PET_POINTS: u64 = 10;
pub const GLASS_POINTS: u64 = 15;
pub const PAPER_POINTS: u64 = 5;
pub const METAL_POINTS: u64 = 20;
pub const PLASTIC_POINTS: u64 = 8;

// Client-local storage keys
pub const SESSION_KEY: &str = "reciclo_user";
pub const STATS_KEY_PREFIX: &str = "reciclo_stats:";
pub const NOTIFICATION_PREFS_KEY: &str = "reciclo_notification_prefs";

// Registration policy
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const MIN_REGISTRATION_PASSWORD_SCORE: u8 = 3;

// Storage defaults
pub const DEFAULT_DB_PATH: &str = "reciclo.db";
pub const DEFAULT_POOL_SIZE: u32 = 4;

// Quiet hours defaults (local wall clock)
pub const DEFAULT_QUIET_HOURS_START: &str = "22:00";
pub const DEFAULT_QUIET_HOURS_END: &str = "08:00";

pub const DEFAULT_AVATAR_URL: &str = "/api/placeholder/150/150";

/// Storage key for a profile's stats record.
pub fn stats_key(profile_id: &str) -> String {
    format!("{STATS_KEY_PREFIX}{profile_id}")
}
