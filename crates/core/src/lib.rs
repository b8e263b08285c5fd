//! # Reciclo Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Progression rules (points → level, rank, achievements)
//! - Port/adapter interfaces (traits)
//! - Stores and services: stats, event intake, session, notifications
//!
//! ## Architecture Principles
//! - Only depends on `reciclo-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod intake;
pub mod notifications;
pub mod progression;
pub mod session;
pub mod stats;

// Re-export specific items to avoid ambiguity
pub use intake::{ActionSummary, EventIntake, RecordOutcome};
pub use notifications::ports::{NotificationPresenter, PreferencesRepository};
pub use notifications::NotificationLedger;
pub use progression::ProgressionRules;
pub use session::password::PasswordStrength;
pub use session::ports::{Authenticator, SessionRepository};
pub use session::SessionStore;
pub use stats::ports::StatsRepository;
pub use stats::{StatsStore, StatsUpdate};
