//! Event intake: the single write path for recycling actions

pub mod service;

pub use service::{ActionSummary, EventIntake, RecordOutcome};
