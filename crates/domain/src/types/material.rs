//! Recyclable material kinds

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Material recognised by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Pet,
    Glass,
    Paper,
    Metal,
    Plastic,
}

impl_domain_status_conversions!(MaterialKind {
    Pet => "pet",
    Glass => "glass",
    Paper => "paper",
    Metal => "metal",
    Plastic => "plastic",
});

impl MaterialKind {
    pub const ALL: [MaterialKind; 5] =
        [Self::Pet, Self::Glass, Self::Paper, Self::Metal, Self::Plastic];

    /// Human-readable label shown after a scan
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pet => "Garrafa PET",
            Self::Glass => "Vidro",
            Self::Paper => "Papel",
            Self::Metal => "Metal",
            Self::Plastic => "Plástico",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pet => "♻️",
            Self::Glass => "🍾",
            Self::Paper => "📄",
            Self::Metal => "🥫",
            Self::Plastic => "🧃",
        }
    }
}
