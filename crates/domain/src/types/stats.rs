//! Gamification statistics types
//!
//! This module centralizes the progression data shared across the app:
//! - The persisted stats record (source of truth)
//! - The derived stats snapshot handed to the UI
//! - Rank tiers
//! - Achievements and challenges

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/* Persisted Record */
/* -------------------------------------------------------------------------- */

/// Persisted gamification state for one profile.
///
/// Only the accumulated totals, earned achievements and challenges are
/// stored. Level, threshold and rank are derived when a snapshot is built,
/// so they can never drift out of sync with `total_points`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub total_points: u64,
    pub total_bottles: u64,
    /// Achievements ever earned. Only grows.
    #[serde(default)]
    pub earned: BTreeSet<AchievementId>,
    #[serde(default)]
    pub active_challenges: Vec<ChallengeProgress>,
}

/* -------------------------------------------------------------------------- */
/* Derived Snapshot */
/* -------------------------------------------------------------------------- */

/// Stats snapshot read by the dashboard, profile and store pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamificationStats {
    pub total_points: u64,
    pub total_bottles: u64,
    /// `floor(total_points / level_size) + 1`
    pub current_level: u64,
    /// `current_level * level_size`
    pub next_level_threshold: u64,
    /// Progress inside the current level, 0-99
    pub level_progress_percent: u8,
    pub rank: Rank,
    pub achievements: Vec<AchievementProgress>,
    pub active_challenges: Vec<ChallengeProgress>,
}

impl GamificationStats {
    pub fn is_earned(&self, id: AchievementId) -> bool {
        self.achievements.iter().any(|a| a.id == id && a.earned)
    }

    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.earned).count()
    }
}

/* -------------------------------------------------------------------------- */
/* Rank */
/* -------------------------------------------------------------------------- */

/// Title derived from the current level
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rank {
    #[default]
    #[serde(rename = "Iniciante")]
    Iniciante,
    #[serde(rename = "Eco Amigo")]
    EcoAmigo,
    #[serde(rename = "Eco Protetor")]
    EcoProtetor,
    #[serde(rename = "Eco Guerreiro")]
    EcoGuerreiro,
    #[serde(rename = "Eco Herói")]
    EcoHeroi,
    #[serde(rename = "Eco Mestre")]
    EcoMestre,
}

impl Rank {
    /// Minimum level for each tier, highest first
    pub const TIERS: [(u64, Rank); 5] = [
        (10, Rank::EcoMestre),
        (7, Rank::EcoHeroi),
        (5, Rank::EcoGuerreiro),
        (3, Rank::EcoProtetor),
        (2, Rank::EcoAmigo),
    ];

    /// Highest tier whose minimum level is reached
    pub fn for_level(level: u64) -> Self {
        Self::TIERS
            .iter()
            .find(|(min_level, _)| level >= *min_level)
            .map_or(Self::Iniciante, |(_, rank)| *rank)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Iniciante => "Iniciante",
            Self::EcoAmigo => "Eco Amigo",
            Self::EcoProtetor => "Eco Protetor",
            Self::EcoGuerreiro => "Eco Guerreiro",
            Self::EcoHeroi => "Eco Herói",
            Self::EcoMestre => "Eco Mestre",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* -------------------------------------------------------------------------- */
/* Achievements */
/* -------------------------------------------------------------------------- */

/// Achievement catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstCollection,
    TenBottles,
    HundredBottles,
    ThousandPoints,
    EcoMaster,
    VisitedCollectionPoints,
    DistinctCollectionPoints,
    TopTenRanking,
}

impl AchievementId {
    /// Catalog order used when building snapshots
    pub const ALL: [AchievementId; 8] = [
        Self::FirstCollection,
        Self::TenBottles,
        Self::HundredBottles,
        Self::ThousandPoints,
        Self::EcoMaster,
        Self::VisitedCollectionPoints,
        Self::DistinctCollectionPoints,
        Self::TopTenRanking,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstCollection => "Primeira Coleta",
            Self::TenBottles => "Reciclou 10 garrafas",
            Self::HundredBottles => "100 Garrafas",
            Self::ThousandPoints => "1000 Pontos",
            Self::EcoMaster => "Eco Mestre",
            Self::VisitedCollectionPoints => "Visitou 5 locais de coleta",
            Self::DistinctCollectionPoints => "Reciclou em 5 pontos diferentes",
            Self::TopTenRanking => "Chegou ao top 10 do ranking",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::FirstCollection => "🌱",
            Self::TenBottles => "🍶",
            Self::HundredBottles => "♻️",
            Self::ThousandPoints => "⭐",
            Self::EcoMaster => "👑",
            Self::VisitedCollectionPoints => "🚗",
            Self::DistinctCollectionPoints => "🌊",
            Self::TopTenRanking => "🏆",
        }
    }
}

/// Achievement as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub id: AchievementId,
    pub title: String,
    pub icon: String,
    pub earned: bool,
}

impl AchievementProgress {
    pub fn new(id: AchievementId, earned: bool) -> Self {
        Self { id, title: id.title().to_string(), icon: id.icon().to_string(), earned }
    }
}

/// Milestones reported by collaborators outside the stats store (map,
/// community ranking). Each unlocks one achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    VisitedCollectionPoints,
    DistinctCollectionPoints,
    TopTenRanking,
}

crate::impl_domain_status_conversions!(Milestone {
    VisitedCollectionPoints => "visited_collection_points",
    DistinctCollectionPoints => "distinct_collection_points",
    TopTenRanking => "top_ten_ranking",
});

impl Milestone {
    pub fn achievement(&self) -> AchievementId {
        match self {
            Self::VisitedCollectionPoints => AchievementId::VisitedCollectionPoints,
            Self::DistinctCollectionPoints => AchievementId::DistinctCollectionPoints,
            Self::TopTenRanking => AchievementId::TopTenRanking,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Challenges */
/* -------------------------------------------------------------------------- */

/// Time-boxed challenge. Progress is supplied by the challenges page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeProgress {
    pub id: String,
    pub title: String,
    pub progress: u64,
    pub target: u64,
    pub reward_points: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ChallengeProgress {
    pub fn is_complete(&self) -> bool {
        self.progress >= self.target
    }
}
