//! Achievement unlock predicates

use reciclo_domain::{AchievementId, StatsRecord};

/// Condition under which an achievement is earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlock {
    MinBottles(u64),
    MinPoints(u64),
    MinLevel(u64),
    /// Reported by a collaborator through a [`reciclo_domain::Milestone`]
    External,
}

impl Unlock {
    /// Evaluate against the record and its derived level
    pub fn is_met(&self, record: &StatsRecord, level: u64) -> bool {
        match *self {
            Self::MinBottles(n) => record.total_bottles >= n,
            Self::MinPoints(n) => record.total_points >= n,
            Self::MinLevel(n) => level >= n,
            Self::External => false,
        }
    }
}

pub fn unlock_rule(id: AchievementId) -> Unlock {
    match id {
        AchievementId::FirstCollection => Unlock::MinBottles(1),
        AchievementId::TenBottles => Unlock::MinBottles(10),
        AchievementId::HundredBottles => Unlock::MinBottles(100),
        AchievementId::ThousandPoints => Unlock::MinPoints(1000),
        AchievementId::EcoMaster => Unlock::MinLevel(10),
        AchievementId::VisitedCollectionPoints
        | AchievementId::DistinctCollectionPoints
        | AchievementId::TopTenRanking => Unlock::External,
    }
}
