//! Safe exposure time calculation.
//!
//! Pipeline, in order:
//!
//! 1. base minutes from the UV category
//! 2. × skin multiplier
//! 3. × environment factor (cloud cover, sunscreen)
//! 4. + vitamin-D adjustment minutes
//! 5. × photosensitivity factor, if on a photosensitizing medication
//! 6. round to the nearest minute and clamp to the policy bounds
//!
//! The photosensitivity reduction runs after the vitamin-D addition so the
//! deficiency bonus is reduced along with everything else.
//!
//! Every step is total: out-of-domain input is mapped to a conservative
//! default by the UV categorizer and the skin model, and the clamp bounds
//! the result.

use crate::policy::ExposurePolicy;
use crate::score::ExposureScore;
use crate::skin::skin_multiplier;
use crate::uv::UvLevel;

/// Inputs to a safe-time calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeTimeInput {
    pub uv_index: f64,
    pub skin_type: u8,
    pub is_cloudy: bool,
    pub has_sunscreen: bool,
    pub vitamin_d_adjustment: i32,
    pub is_photosensitive: bool,
}

/// Unrounded protected time before adjustments: base × skin × environment.
pub fn protected_minutes(input: &SafeTimeInput, policy: &ExposurePolicy) -> f64 {
    let base = UvLevel::from_uv_index(input.uv_index).base_minutes() as f64;
    let skin = skin_multiplier(input.skin_type);
    let env = policy.environment_factor(input.is_cloudy, input.has_sunscreen);
    base * skin * env
}

pub fn apply_vitamin_d_adjustment(minutes: f64, adjustment: i32) -> f64 {
    minutes + adjustment as f64
}

pub fn apply_photosensitivity(minutes: f64, is_photosensitive: bool, policy: &ExposurePolicy) -> f64 {
    if is_photosensitive {
        minutes * policy.photosensitivity_factor
    } else {
        minutes
    }
}

/// Round to the nearest minute and clamp into `[min_minutes, max_minutes]`.
pub fn clamp_minutes(minutes: f64, policy: &ExposurePolicy) -> u32 {
    let rounded = minutes.round();
    if rounded.is_nan() || rounded <= policy.min_minutes as f64 {
        policy.min_minutes
    } else if rounded >= policy.max_minutes as f64 {
        policy.max_minutes
    } else {
        rounded as u32
    }
}

/// Run the full pipeline under `policy`.
pub fn safe_minutes(input: &SafeTimeInput, policy: &ExposurePolicy) -> u32 {
    let protected = protected_minutes(input, policy);
    let adjusted = apply_vitamin_d_adjustment(protected, input.vitamin_d_adjustment);
    let reduced = apply_photosensitivity(adjusted, input.is_photosensitive, policy);
    let minutes = clamp_minutes(reduced, policy);

    tracing::debug!(
        uv_index = input.uv_index,
        skin_type = input.skin_type,
        protected,
        adjusted,
        reduced,
        minutes,
        "computed safe exposure time"
    );
    minutes
}

/// Safe exposure duration in minutes under the default policy.
///
/// Pass `vitamin_d_adjustment = 0` and `is_photosensitive = false` for the
/// basic calculation.
pub fn calculate_safe_time(
    uv_index: f64,
    skin_type: u8,
    is_cloudy: bool,
    has_sunscreen: bool,
    vitamin_d_adjustment: i32,
    is_photosensitive: bool,
) -> u32 {
    let input = SafeTimeInput {
        uv_index,
        skin_type,
        is_cloudy,
        has_sunscreen,
        vitamin_d_adjustment,
        is_photosensitive,
    };
    safe_minutes(&input, &ExposurePolicy::default())
}

/// Calculator bound to a specific exposure policy.
#[derive(Debug, Clone, Default)]
pub struct ExposureCalculator {
    policy: ExposurePolicy,
}

impl ExposureCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ExposurePolicy) -> Self {
        ExposureCalculator { policy }
    }

    /// Build a calculator from a TOML policy document.
    pub fn from_toml(source: String) -> Result<Self, crate::error::ConfigError> {
        ExposurePolicy::from_toml_str(&source).map(Self::with_policy)
    }

    pub fn safe_minutes(
        &self,
        uv_index: f64,
        skin_type: u8,
        is_cloudy: bool,
        has_sunscreen: bool,
        vitamin_d_adjustment: i32,
        is_photosensitive: bool,
    ) -> u32 {
        let input = SafeTimeInput {
            uv_index,
            skin_type,
            is_cloudy,
            has_sunscreen,
            vitamin_d_adjustment,
            is_photosensitive,
        };
        safe_minutes(&input, &self.policy)
    }

    pub fn exposure_score(
        &self,
        duration_minutes: f64,
        uv_index: f64,
        skin_type: u8,
        has_sunscreen: bool,
        is_cloudy: bool,
    ) -> ExposureScore {
        crate::score::exposure_score(
            duration_minutes,
            uv_index,
            skin_type,
            has_sunscreen,
            is_cloudy,
            &self.policy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn basic(uv: f64, skin: u8, cloudy: bool, sunscreen: bool) -> u32 {
        calculate_safe_time(uv, skin, cloudy, sunscreen, 0, false)
    }

    #[test]
    fn test_high_uv_type_iii() {
        // 15 × 1.0 × 1.0 = 15
        assert_eq!(basic(6.0, 3, false, false), 15);
    }

    #[test]
    fn test_extreme_uv_type_i_sunscreen_hits_floor() {
        // 3 × 0.5 × 1.5 = 2.25 -> 2
        assert_eq!(basic(11.0, 1, false, true), 2);
    }

    #[test]
    fn test_low_uv_type_vi_all_protection_hits_ceiling() {
        // 60 × 2.5 × 1.95 = 292.5 -> 90
        assert_eq!(basic(1.0, 6, true, true), 90);
    }

    #[test]
    fn test_moderate_uv_by_skin_type() {
        let expected = [15, 21, 30, 45, 60, 75];
        for (skin, want) in (1..=6).zip(expected) {
            assert_eq!(basic(3.0, skin, false, false), want, "skin type {skin}");
        }
    }

    #[test]
    fn test_vitamin_d_adjustment_added() {
        // 15 + 10 = 25
        assert_eq!(calculate_safe_time(6.0, 3, false, false, 10, false), 25);
    }

    #[test]
    fn test_photosensitivity_halves_after_adjustment() {
        // (15 + 10) × 0.5 = 12.5 -> 13
        assert_eq!(calculate_safe_time(6.0, 3, false, false, 10, true), 13);
        // 30 × 0.5 = 15
        assert_eq!(calculate_safe_time(3.0, 3, false, false, 0, true), 15);
    }

    #[test]
    fn test_photosensitivity_respects_floor() {
        assert_eq!(calculate_safe_time(11.0, 1, false, false, 0, true), 2);
    }

    #[test]
    fn test_negative_adjustment_clamped_to_floor() {
        assert_eq!(calculate_safe_time(6.0, 3, false, false, -100, false), 2);
    }

    #[test]
    fn test_unknown_skin_type_uses_baseline() {
        assert_eq!(basic(6.0, 0, false, false), basic(6.0, 3, false, false));
        assert_eq!(basic(6.0, 42, false, false), 15);
    }

    #[test]
    fn test_invalid_uv_uses_low_bucket() {
        assert_eq!(basic(-2.0, 3, false, false), 60);
        assert_eq!(basic(f64::NAN, 3, false, false), 60);
    }

    #[test]
    fn test_clamp_minutes() {
        let policy = ExposurePolicy::default();
        assert_eq!(clamp_minutes(0.0, &policy), 2);
        assert_eq!(clamp_minutes(-5.0, &policy), 2);
        assert_eq!(clamp_minutes(2.49, &policy), 2);
        assert_eq!(clamp_minutes(2.5, &policy), 3);
        assert_eq!(clamp_minutes(89.6, &policy), 90);
        assert_eq!(clamp_minutes(1e9, &policy), 90);
        assert_eq!(clamp_minutes(f64::NAN, &policy), 2);
    }

    #[test]
    fn test_custom_policy() {
        let calc = ExposureCalculator::from_toml("max_minutes = 240".to_string()).unwrap();
        assert_eq!(calc.safe_minutes(1.0, 6, true, true, 0, false), 240);
        assert_eq!(calc.safe_minutes(6.0, 3, false, false, 0, false), 15);
    }

    #[test]
    fn test_loaded_policy_keeps_protection_protective() {
        assert!(ExposureCalculator::from_toml("cloud_factor = 0.5\nsunscreen_factor = 0.5".to_string()).is_err());

        let calc = ExposureCalculator::from_toml("cloud_factor = 1.1\nsunscreen_factor = 1.2".to_string()).unwrap();
        let clear = calc.safe_minutes(3.0, 3, false, false, 0, false);
        assert!(calc.safe_minutes(3.0, 3, true, false, 0, false) >= clear);
        assert!(calc.safe_minutes(3.0, 3, false, true, 0, false) >= clear);

        let unprotected = calc.exposure_score(30.0, 5.0, 3, false, false).score;
        assert!(calc.exposure_score(30.0, 5.0, 3, true, false).score <= unprotected);
        assert!(calc.exposure_score(30.0, 5.0, 3, false, true).score <= unprotected);
    }

    #[test]
    fn test_calculator_matches_free_function() {
        let calc = ExposureCalculator::new();
        assert_eq!(
            calc.safe_minutes(8.0, 2, true, false, 5, true),
            calculate_safe_time(8.0, 2, true, false, 5, true)
        );
    }

    proptest! {
        #[test]
        fn safe_time_always_in_bounds(
            uv in 0.0..50.0f64,
            skin in 1u8..=6,
            cloudy in any::<bool>(),
            sunscreen in any::<bool>(),
            photosensitive in any::<bool>(),
            adjustment in 0i32..=10,
        ) {
            let minutes = calculate_safe_time(uv, skin, cloudy, sunscreen, adjustment, photosensitive);
            prop_assert!((2..=90).contains(&minutes), "got {} minutes", minutes);
        }

        #[test]
        fn safe_time_is_deterministic(
            uv in 0.0..50.0f64,
            skin in 1u8..=6,
            cloudy in any::<bool>(),
            sunscreen in any::<bool>(),
        ) {
            prop_assert_eq!(basic(uv, skin, cloudy, sunscreen), basic(uv, skin, cloudy, sunscreen));
        }

        #[test]
        fn darker_skin_never_shortens_safe_time(
            uv in 0.0..50.0f64,
            cloudy in any::<bool>(),
            sunscreen in any::<bool>(),
        ) {
            for skin in 1u8..6 {
                prop_assert!(basic(uv, skin, cloudy, sunscreen) <= basic(uv, skin + 1, cloudy, sunscreen));
            }
        }

        #[test]
        fn sunscreen_never_shortens_safe_time(
            uv in 0.0..50.0f64,
            skin in 1u8..=6,
            cloudy in any::<bool>(),
        ) {
            prop_assert!(basic(uv, skin, cloudy, true) >= basic(uv, skin, cloudy, false));
        }

        #[test]
        fn clouds_never_shorten_safe_time(
            uv in 0.0..50.0f64,
            skin in 1u8..=6,
            sunscreen in any::<bool>(),
        ) {
            prop_assert!(basic(uv, skin, true, sunscreen) >= basic(uv, skin, false, sunscreen));
        }

        #[test]
        fn photosensitivity_never_extends_safe_time(
            uv in 0.0..50.0f64,
            skin in 1u8..=6,
            adjustment in 0i32..=10,
        ) {
            prop_assert!(
                calculate_safe_time(uv, skin, false, false, adjustment, true)
                    <= calculate_safe_time(uv, skin, false, false, adjustment, false)
            );
        }
    }
}
