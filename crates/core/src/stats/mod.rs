//! Stats store: owner of the active profile's gamification state

pub mod ports;
pub mod service;

pub use service::{StatsStore, StatsUpdate};
