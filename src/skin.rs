//! Fitzpatrick skin sensitivity model.

use serde::{Deserialize, Serialize};

/// Multiplier used for unknown skin types (Type III baseline).
pub const BASELINE_MULTIPLIER: f64 = 1.0;

/// Fitzpatrick skin type (I–VI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkinType {
    I,
    II,
    III,
    IV,
    V,
    VI,
}

impl SkinType {
    pub const ALL: [SkinType; 6] = [
        SkinType::I,
        SkinType::II,
        SkinType::III,
        SkinType::IV,
        SkinType::V,
        SkinType::VI,
    ];

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(SkinType::I),
            2 => Some(SkinType::II),
            3 => Some(SkinType::III),
            4 => Some(SkinType::IV),
            5 => Some(SkinType::V),
            6 => Some(SkinType::VI),
            _ => None,
        }
    }

    /// Relative tolerance to unprotected UV, with Type III as 1.0.
    /// Increases monotonically with pigmentation.
    pub fn multiplier(&self) -> f64 {
        match self {
            SkinType::I => 0.5,
            SkinType::II => 0.7,
            SkinType::III => 1.0,
            SkinType::IV => 1.5,
            SkinType::V => 2.0,
            SkinType::VI => 2.5,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SkinType::I => "Type I: Very fair skin, always burns, never tans",
            SkinType::II => "Type II: Fair skin, usually burns, tans minimally",
            SkinType::III => "Type III: Medium skin, sometimes burns, tans gradually",
            SkinType::IV => "Type IV: Olive skin, rarely burns, tans easily",
            SkinType::V => "Type V: Brown skin, very rarely burns, tans darkly",
            SkinType::VI => "Type VI: Dark brown to black skin, never burns",
        }
    }
}

/// Sensitivity multiplier for a numeric skin type. Unknown types use the
/// Type III baseline.
pub fn skin_multiplier(skin_type: u8) -> f64 {
    match SkinType::from_number(skin_type) {
        Some(t) => t.multiplier(),
        None => {
            tracing::warn!(skin_type, "unknown skin type, using Type III baseline");
            BASELINE_MULTIPLIER
        }
    }
}

pub fn get_skin_type_description(skin_type: u8) -> String {
    SkinType::from_number(skin_type)
        .map(|t| t.description())
        .unwrap_or("Unknown skin type (Type III baseline)")
        .to_string()
}
