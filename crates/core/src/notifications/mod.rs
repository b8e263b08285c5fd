//! Notification ledger: session-scoped inbox plus persisted delivery
//! preferences

pub mod ledger;
pub mod ports;

pub use ledger::NotificationLedger;
