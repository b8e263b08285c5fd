//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DB_PATH, DEFAULT_LEVEL_SIZE, DEFAULT_POOL_SIZE, GLASS_POINTS, METAL_POINTS,
    PAPER_POINTS, PET_POINTS, PLASTIC_POINTS,
};
use crate::types::MaterialKind;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub gamification: GamificationConfig,
    pub session: SessionConfig,
}

/// Client-local storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub pool_size: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { path: DEFAULT_DB_PATH.to_string(), pool_size: DEFAULT_POOL_SIZE }
    }
}

/// Progression and reward tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamificationConfig {
    /// Points needed per level
    pub level_size: u64,
    pub rates: MaterialRates,
    /// Points above which a reward notification is sent with high priority.
    /// `None` celebrates every action.
    pub celebration_threshold: Option<u64>,
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            level_size: DEFAULT_LEVEL_SIZE,
            rates: MaterialRates::default(),
            celebration_threshold: None,
        }
    }
}

/// Points awarded per recycled unit of each material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRates {
    pub pet: u64,
    pub glass: u64,
    pub paper: u64,
    pub metal: u64,
    pub plastic: u64,
}

impl MaterialRates {
    pub fn rate_for(&self, material: MaterialKind) -> u64 {
        match material {
            MaterialKind::Pet => self.pet,
            MaterialKind::Glass => self.glass,
            MaterialKind::Paper => self.paper,
            MaterialKind::Metal => self.metal,
            MaterialKind::Plastic => self.plastic,
        }
    }
}

impl Default for MaterialRates {
    fn default() -> Self {
        Self {
            pet: PET_POINTS,
            glass: GLASS_POINTS,
            paper: PAPER_POINTS,
            metal: METAL_POINTS,
            plastic: PLASTIC_POINTS,
        }
    }
}

/// Session behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Artificial delay applied by the stub authenticator
    pub simulated_latency_ms: u64,
}
