//! Stats store - sole authority for mutating and deriving gamification stats

use std::sync::Arc;

use reciclo_domain::{
    AchievementId, GamificationStats, Milestone, RecicloError, Result, StatsRecord,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::ports::StatsRepository;
use crate::progression::ProgressionRules;

/// Result of a mutation: the new snapshot plus achievements that flipped to
/// earned during this call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsUpdate {
    pub stats: GamificationStats,
    pub newly_earned: Vec<AchievementId>,
}

struct ActiveStats {
    profile_id: String,
    record: StatsRecord,
}

/// Holds and persists the stats of the active profile.
///
/// The in-memory record is guarded by an async mutex that stays locked
/// across recompute and persist, so no reader observes updated totals with
/// stale achievements. The record is only replaced after the save
/// succeeded.
pub struct StatsStore {
    repository: Arc<dyn StatsRepository>,
    rules: ProgressionRules,
    active: Mutex<Option<ActiveStats>>,
}

impl StatsStore {
    /// Create a store with no active profile
    pub fn new(repository: Arc<dyn StatsRepository>, rules: ProgressionRules) -> Self {
        Self { repository, rules, active: Mutex::new(None) }
    }

    pub fn rules(&self) -> &ProgressionRules {
        &self.rules
    }

    /// Load `profile_id`'s stats and make it the active profile.
    ///
    /// Missing or corrupt data yields zeroed defaults; corruption is logged
    /// and never surfaced.
    pub async fn load(&self, profile_id: &str) -> Result<GamificationStats> {
        let record = match self.repository.load(profile_id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(profile_id, "no persisted stats, starting from defaults");
                StatsRecord::default()
            }
            Err(RecicloError::MalformedPersistedState(reason)) => {
                warn!(profile_id, %reason, "persisted stats are corrupt, using defaults");
                StatsRecord::default()
            }
            Err(err) => return Err(err),
        };

        let stats = self.rules.derive(&record);
        *self.active.lock().await = Some(ActiveStats { profile_id: profile_id.to_string(), record });
        Ok(stats)
    }

    /// Start `profile_id` from zeroed stats and persist them. Used when a
    /// profile is created.
    pub async fn init_fresh(&self, profile_id: &str) -> Result<GamificationStats> {
        let record = StatsRecord::default();
        self.repository.save(profile_id, &record).await?;

        let stats = self.rules.derive(&record);
        *self.active.lock().await = Some(ActiveStats { profile_id: profile_id.to_string(), record });
        info!(profile_id, "initialised fresh stats");
        Ok(stats)
    }

    /// Forget the active profile without touching storage
    pub async fn teardown(&self) {
        if let Some(active) = self.active.lock().await.take() {
            debug!(profile_id = %active.profile_id, "stats store torn down");
        }
    }

    pub async fn active_profile_id(&self) -> Option<String> {
        self.active.lock().await.as_ref().map(|a| a.profile_id.clone())
    }

    /// Snapshot of the active profile, if any
    pub async fn current(&self) -> Option<GamificationStats> {
        self.active.lock().await.as_ref().map(|a| self.rules.derive(&a.record))
    }

    /// Stats for `profile_id`, which must be the active session's profile
    pub async fn get_stats(&self, profile_id: &str) -> Result<GamificationStats> {
        let guard = self.active.lock().await;
        match guard.as_ref() {
            Some(active) if active.profile_id == profile_id => Ok(self.rules.derive(&active.record)),
            _ => Err(RecicloError::ProfileNotFound(profile_id.to_string())),
        }
    }

    /// Add points and items, recompute derived fields, persist, and return
    /// the new snapshot.
    pub async fn record_action(&self, points_delta: u64, items_delta: u64) -> Result<GamificationStats> {
        self.apply_action(points_delta, items_delta).await.map(|update| update.stats)
    }

    /// Same as [`Self::record_action`] but also reports newly earned
    /// achievements.
    pub async fn apply_action(&self, points_delta: u64, items_delta: u64) -> Result<StatsUpdate> {
        self.mutate(|record| {
            record.total_points = record.total_points.checked_add(points_delta).ok_or_else(|| {
                RecicloError::InvalidQuantity(format!("points total overflows by {points_delta}"))
            })?;
            record.total_bottles = record.total_bottles.checked_add(items_delta).ok_or_else(|| {
                RecicloError::InvalidQuantity(format!("bottle total overflows by {items_delta}"))
            })?;
            Ok(())
        })
        .await
    }

    /// Mark an externally driven achievement as earned
    pub async fn record_milestone(&self, milestone: Milestone) -> Result<StatsUpdate> {
        let achievement = milestone.achievement();
        self.mutate(|record| {
            record.earned.insert(achievement);
            Ok(())
        })
        .await
    }

    /// Restore zeroed defaults for the active profile and persist them
    pub async fn reset(&self) -> Result<GamificationStats> {
        let mut guard = self.active.lock().await;
        let active = guard.as_mut().ok_or_else(no_active_profile)?;

        let record = StatsRecord::default();
        self.repository.save(&active.profile_id, &record).await?;
        active.record = record;

        info!(profile_id = %active.profile_id, "stats reset to defaults");
        Ok(self.rules.derive(&active.record))
    }

    async fn mutate<F>(&self, change: F) -> Result<StatsUpdate>
    where
        F: FnOnce(&mut StatsRecord) -> Result<()>,
    {
        let mut guard = self.active.lock().await;
        let active = guard.as_mut().ok_or_else(no_active_profile)?;

        let mut next = active.record.clone();
        change(&mut next)?;
        if !self.rules.supports_total(next.total_points) {
            return Err(RecicloError::InvalidQuantity(format!(
                "{} points is past the highest level",
                next.total_points
            )));
        }
        next.earned = self.rules.achievements_for(&next);

        let newly_earned: Vec<AchievementId> =
            next.earned.difference(&active.record.earned).copied().collect();

        self.repository.save(&active.profile_id, &next).await?;
        active.record = next;

        let stats = self.rules.derive(&active.record);
        debug!(
            profile_id = %active.profile_id,
            total_points = stats.total_points,
            total_bottles = stats.total_bottles,
            level = stats.current_level,
            newly_earned = newly_earned.len(),
            "stats updated"
        );
        Ok(StatsUpdate { stats, newly_earned })
    }
}

fn no_active_profile() -> RecicloError {
    RecicloError::ProfileNotFound("no active session".into())
}
