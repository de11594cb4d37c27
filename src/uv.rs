//! UV index categorization.
//!
//! Buckets follow the WHO UV index scale. Each bucket carries the base
//! unprotected exposure time (Type III skin, no modifiers) used by the
//! safe-time calculator, plus a display label and color token.

use serde::{Deserialize, Serialize};

/// Severity level of a UV index reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UvLevel {
    /// 0–2
    Low,
    /// 3–5
    Moderate,
    /// 6–7
    High,
    /// 8–10
    VeryHigh,
    /// 11+
    Extreme,
}

impl UvLevel {
    /// Classify a UV index. Buckets are upper-inclusive, so fractional
    /// readings between the integer bounds fall into the higher bucket.
    ///
    /// Negative and NaN readings fall back to `Low`.
    pub fn from_uv_index(uv_index: f64) -> Self {
        if uv_index.is_nan() || uv_index < 0.0 {
            tracing::warn!(uv_index, "UV index outside scale, using Low bucket");
            return UvLevel::Low;
        }
        if uv_index <= 2.0 {
            UvLevel::Low
        } else if uv_index <= 5.0 {
            UvLevel::Moderate
        } else if uv_index <= 7.0 {
            UvLevel::High
        } else if uv_index <= 10.0 {
            UvLevel::VeryHigh
        } else {
            UvLevel::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
            UvLevel::Extreme => "Extreme",
        }
    }

    /// Unprotected exposure time in minutes for Type III skin.
    pub fn base_minutes(&self) -> u32 {
        match self {
            UvLevel::Low => 60,
            UvLevel::Moderate => 30,
            UvLevel::High => 15,
            UvLevel::VeryHigh => 8,
            UvLevel::Extreme => 3,
        }
    }

    /// WHO color token for the level.
    pub fn color(&self) -> &'static str {
        match self {
            UvLevel::Low => "#4CAF50",
            UvLevel::Moderate => "#FFC107",
            UvLevel::High => "#FF9800",
            UvLevel::VeryHigh => "#F44336",
            UvLevel::Extreme => "#9C27B0",
        }
    }
}

/// Display and lookup data for a UV index reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UvCategory {
    pub level: UvLevel,
    pub label: String,
    pub base_minutes: u32,
    pub color: String,
}

impl From<UvLevel> for UvCategory {
    fn from(level: UvLevel) -> Self {
        UvCategory {
            level,
            label: level.label().to_string(),
            base_minutes: level.base_minutes(),
            color: level.color().to_string(),
        }
    }
}

/// Categorize a UV index reading. Total: out-of-scale input maps to `Low`.
pub fn categorize_uv(uv_index: f64) -> UvCategory {
    UvLevel::from_uv_index(uv_index).into()
}
