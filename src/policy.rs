//! Numeric exposure policy.
//!
//! The factors and clamp bounds used by the safe-time and exposure-score
//! calculators. `ExposurePolicy::default()` is the clinical policy used by
//! the free functions; hosts can load an alternative from TOML.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CLOUD_FACTOR: f64 = 1.3;
pub const DEFAULT_SUNSCREEN_FACTOR: f64 = 1.5;
pub const DEFAULT_PHOTOSENSITIVITY_FACTOR: f64 = 0.5;
pub const DEFAULT_MIN_MINUTES: u32 = 2;
pub const DEFAULT_MAX_MINUTES: u32 = 90;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposurePolicy {
    /// Attenuation from cloud cover (>= 1, extends safe time).
    pub cloud_factor: f64,
    /// Protection from sunscreen (>= 1, extends safe time).
    pub sunscreen_factor: f64,
    /// Reduction applied for photosensitizing medication (0 < f <= 1).
    pub photosensitivity_factor: f64,
    pub min_minutes: u32,
    pub max_minutes: u32,
}

impl Default for ExposurePolicy {
    fn default() -> Self {
        ExposurePolicy {
            cloud_factor: DEFAULT_CLOUD_FACTOR,
            sunscreen_factor: DEFAULT_SUNSCREEN_FACTOR,
            photosensitivity_factor: DEFAULT_PHOTOSENSITIVITY_FACTOR,
            min_minutes: DEFAULT_MIN_MINUTES,
            max_minutes: DEFAULT_MAX_MINUTES,
        }
    }
}

impl ExposurePolicy {
    /// Parse and validate a policy from TOML. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let policy: ExposurePolicy = toml::from_str(source)?;
        policy.validate()?;
        tracing::debug!(?policy, "loaded exposure policy");
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("cloud_factor", self.cloud_factor)?;
        positive("sunscreen_factor", self.sunscreen_factor)?;
        positive("photosensitivity_factor", self.photosensitivity_factor)?;
        at_least_one("cloud_factor", self.cloud_factor)?;
        at_least_one("sunscreen_factor", self.sunscreen_factor)?;
        if self.photosensitivity_factor > 1.0 {
            return Err(invalid(
                "photosensitivity_factor",
                "must not exceed 1.0",
            ));
        }
        if self.min_minutes > self.max_minutes {
            return Err(invalid("min_minutes", "must not exceed max_minutes"));
        }
        Ok(())
    }

    /// Combined environmental factor. Cloud cover and sunscreen compose
    /// multiplicatively.
    pub fn environment_factor(&self, is_cloudy: bool, has_sunscreen: bool) -> f64 {
        let mut factor = 1.0;
        if is_cloudy {
            factor *= self.cloud_factor;
        }
        if has_sunscreen {
            factor *= self.sunscreen_factor;
        }
        factor
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite number greater than zero"))
    }
}

/// Protective factors may only extend safe time, never shorten it.
fn at_least_one(field: &str, value: f64) -> Result<(), ConfigError> {
    if value >= 1.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be at least 1.0"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
