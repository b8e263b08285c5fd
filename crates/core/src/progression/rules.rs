//! Level, rank and achievement derivation

use std::collections::BTreeSet;

use reciclo_domain::constants::DEFAULT_LEVEL_SIZE;
use reciclo_domain::{
    AchievementId, AchievementProgress, GamificationConfig, GamificationStats, Rank, StatsRecord,
};

use super::achievements::unlock_rule;

/// Progression rules parameterised by the level size.
///
/// Every method is pure; the rules hold no state besides configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionRules {
    level_size: u64,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self { level_size: DEFAULT_LEVEL_SIZE }
    }
}

impl ProgressionRules {
    /// A zero level size is treated as one point per level.
    pub fn new(level_size: u64) -> Self {
        Self { level_size: level_size.max(1) }
    }

    pub fn from_config(config: &GamificationConfig) -> Self {
        Self::new(config.level_size)
    }

    pub fn level_size(&self) -> u64 {
        self.level_size
    }

    /// `floor(total_points / level_size) + 1`
    pub fn level_for(&self, total_points: u64) -> u64 {
        (total_points / self.level_size).saturating_add(1)
    }

    /// Points at which `level` ends
    pub fn next_level_threshold(&self, level: u64) -> u64 {
        level.saturating_mul(self.level_size)
    }

    /// Whether `total_points` has a next-level threshold that fits in a
    /// `u64`. Totals past this bound cannot be stored.
    pub fn supports_total(&self, total_points: u64) -> bool {
        (total_points / self.level_size)
            .checked_add(1)
            .and_then(|level| level.checked_mul(self.level_size))
            .is_some()
    }

    pub fn rank_for(&self, level: u64) -> Rank {
        Rank::for_level(level)
    }

    /// Percent of the current level already completed (0-99)
    pub fn level_progress_percent(&self, total_points: u64) -> u8 {
        let into_level = u128::from(total_points % self.level_size);
        let percent = into_level * 100 / u128::from(self.level_size);
        u8::try_from(percent).unwrap_or(99)
    }

    /// Earned set after evaluating every predicate against `record`.
    ///
    /// Previously earned achievements are kept regardless of the current
    /// totals.
    pub fn achievements_for(&self, record: &StatsRecord) -> BTreeSet<AchievementId> {
        let level = self.level_for(record.total_points);
        let mut earned = record.earned.clone();
        earned.extend(
            AchievementId::ALL.into_iter().filter(|id| unlock_rule(*id).is_met(record, level)),
        );
        earned
    }

    /// Build the snapshot the UI reads. Level, threshold and rank are
    /// computed here and nowhere else.
    pub fn derive(&self, record: &StatsRecord) -> GamificationStats {
        let current_level = self.level_for(record.total_points);
        let earned = self.achievements_for(record);

        GamificationStats {
            total_points: record.total_points,
            total_bottles: record.total_bottles,
            current_level,
            next_level_threshold: self.next_level_threshold(current_level),
            level_progress_percent: self.level_progress_percent(record.total_points),
            rank: self.rank_for(current_level),
            achievements: AchievementId::ALL
                .into_iter()
                .map(|id| AchievementProgress::new(id, earned.contains(&id)))
                .collect(),
            active_challenges: record.active_challenges.clone(),
        }
    }
}
