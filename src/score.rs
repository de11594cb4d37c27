//! Post-session exposure scoring.
//!
//! Raw exposure is the UV dose received, in UV-minutes (duration × UV
//! index). The score divides that dose by the same skin and environment
//! factors the safe-time calculator multiplies by, so protection lowers the
//! effective dose rather than extending the allowed time.

use serde::{Deserialize, Serialize};

use crate::policy::ExposurePolicy;
use crate::skin::skin_multiplier;

/// Upper bound (inclusive) of the `Safe` band. A session lasting exactly
/// the computed safe time scores at most base minutes × the top UV of its
/// bucket (150 for Moderate UV) plus rounding, so it always stays `Safe`
/// for UV up to 20.
pub const SAFE_MAX_SCORE: f64 = 160.0;
/// Upper bound (inclusive) of the `Moderate` band: twice the safe dose.
pub const MODERATE_MAX_SCORE: f64 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExposureStatus {
    Safe,
    Moderate,
    HighRisk,
}

impl ExposureStatus {
    pub fn from_score(score: f64) -> Self {
        if score <= SAFE_MAX_SCORE {
            ExposureStatus::Safe
        } else if score <= MODERATE_MAX_SCORE {
            ExposureStatus::Moderate
        } else {
            ExposureStatus::HighRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExposureStatus::Safe => "Safe",
            ExposureStatus::Moderate => "Moderate",
            ExposureStatus::HighRisk => "High Risk",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            ExposureStatus::Safe => {
                "Great session. Your exposure stayed within a safe range for your skin type."
            }
            ExposureStatus::Moderate => {
                "You are near your limit. Seek shade and cover up for the rest of the day."
            }
            ExposureStatus::HighRisk => {
                "High exposure. Stay out of the sun, cool and moisturize your skin, and watch for signs of sunburn."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExposureScore {
    /// Effective dose after skin and environment factors, one decimal.
    pub score: f64,
    /// Unadjusted dose in UV-minutes.
    pub raw_exposure: f64,
    pub status: ExposureStatus,
    pub label: String,
    pub recommendation: String,
}

/// Non-negative, finite-or-zero view of a measured quantity.
fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Score a completed session under `policy`.
pub fn exposure_score(
    duration_minutes: f64,
    uv_index: f64,
    skin_type: u8,
    has_sunscreen: bool,
    is_cloudy: bool,
    policy: &ExposurePolicy,
) -> ExposureScore {
    let raw_exposure = non_negative(duration_minutes) * non_negative(uv_index);
    let protection = skin_multiplier(skin_type) * policy.environment_factor(is_cloudy, has_sunscreen);
    let score = round_tenth(raw_exposure / protection);
    let status = ExposureStatus::from_score(score);

    tracing::debug!(
        raw_exposure,
        score,
        status = status.label(),
        "scored exposure session"
    );

    ExposureScore {
        score,
        raw_exposure: round_tenth(raw_exposure),
        status,
        label: status.label().to_string(),
        recommendation: status.recommendation().to_string(),
    }
}

/// Score a completed session under the default policy.
pub fn calculate_exposure_score(
    duration_minutes: f64,
    uv_index: f64,
    skin_type: u8,
    has_sunscreen: bool,
    is_cloudy: bool,
) -> ExposureScore {
    exposure_score(
        duration_minutes,
        uv_index,
        skin_type,
        has_sunscreen,
        is_cloudy,
        &ExposurePolicy::default(),
    )
}
