//! Progression rules: pure mappings from accumulated totals to level, rank
//! and achievements.

pub mod achievements;
pub mod rules;

pub use achievements::{unlock_rule, Unlock};
pub use rules::ProgressionRules;
