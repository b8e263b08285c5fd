//! Recycling action intake

use std::sync::Arc;

use reciclo_domain::{
    AchievementId, GamificationConfig, GamificationStats, MaterialKind, NewNotification,
    NotificationPriority, NotificationType, RecicloError, Result,
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::notifications::NotificationLedger;
use crate::stats::StatsStore;

/// Human-readable description of a recorded action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSummary {
    pub material: MaterialKind,
    pub material_label: String,
    pub items: u64,
    pub points_awarded: u64,
    pub newly_earned: Vec<AchievementId>,
    pub message: String,
}

/// Stats after the action plus its summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    pub stats: GamificationStats,
    pub summary: ActionSummary,
}

/// Validates recycling actions, prices them and applies them to the
/// [`StatsStore`]. Each accepted action also lands in the
/// [`NotificationLedger`].
pub struct EventIntake {
    stats: Arc<StatsStore>,
    ledger: Arc<NotificationLedger>,
    config: GamificationConfig,
}

impl EventIntake {
    pub fn new(
        stats: Arc<StatsStore>,
        ledger: Arc<NotificationLedger>,
        config: GamificationConfig,
    ) -> Self {
        Self { stats, ledger, config }
    }

    /// Record `count` items of the material named `material`.
    ///
    /// Unknown materials fail with `InvalidMaterial`, non-positive counts
    /// with `InvalidQuantity`. Neither touches the stats.
    pub async fn record(&self, material: &str, count: i64) -> Result<RecordOutcome> {
        let material: MaterialKind = material.parse().map_err(RecicloError::InvalidMaterial)?;
        let items = u64::try_from(count)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| RecicloError::InvalidQuantity(format!("item count must be positive, got {count}")))?;

        self.record_material(material, items).await
    }

    #[instrument(skip(self))]
    pub async fn record_material(&self, material: MaterialKind, items: u64) -> Result<RecordOutcome> {
        if items == 0 {
            return Err(RecicloError::InvalidQuantity("item count must be positive, got 0".into()));
        }
        let points = self.quote(material, items)?;

        let update = self.stats.apply_action(points, items).await?;
        info!(points_delta = points, items, level = update.stats.current_level, "recycling action recorded");

        self.notify_reward(material, items, points);
        for achievement in &update.newly_earned {
            self.notify_achievement(*achievement);
        }

        let label = material.display_name();
        let summary = ActionSummary {
            material,
            material_label: label.to_string(),
            items,
            points_awarded: points,
            message: format!("{items}x {label}: +{points} pontos"),
            newly_earned: update.newly_earned,
        };
        Ok(RecordOutcome { stats: update.stats, summary })
    }

    /// Points `items` of `material` are worth under the configured rates
    pub fn quote(&self, material: MaterialKind, items: u64) -> Result<u64> {
        self.config.rates.rate_for(material).checked_mul(items).ok_or_else(|| {
            RecicloError::InvalidQuantity(format!("{items} items of {material} overflow the points total"))
        })
    }

    fn celebration_priority(&self, points: u64) -> NotificationPriority {
        match self.config.celebration_threshold {
            Some(threshold) if points <= threshold => NotificationPriority::Medium,
            _ => NotificationPriority::High,
        }
    }

    fn notify_reward(&self, material: MaterialKind, items: u64, points: u64) {
        self.ledger.add(
            NewNotification::new(
                NotificationType::Reward,
                format!("+{points} pontos ganhos!"),
                format!("{items}x {} reciclado(s)", material.display_name()),
            )
            .with_icon(material.icon())
            .with_priority(self.celebration_priority(points)),
        );
    }

    fn notify_achievement(&self, achievement: AchievementId) {
        self.ledger.add(
            NewNotification::new(
                NotificationType::Reward,
                "Nova conquista desbloqueada",
                achievement.title(),
            )
            .with_icon(achievement.icon())
            .with_priority(NotificationPriority::High),
        );
    }
}
