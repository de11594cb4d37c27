//! Vitamin-D status classification and lab report history.
//!
//! A 25(OH)D lab value (ng/mL) maps to a deficiency status and an
//! adjustment in minutes added to future safe-exposure calculations. The
//! most recent report determines the adjustment in effect.

use serde::{Deserialize, Serialize};

/// Lower bound of the plausible 25(OH)D domain (ng/mL).
pub const MIN_PLAUSIBLE_NG_ML: f64 = 10.0;
/// Upper bound of the plausible 25(OH)D domain (ng/mL).
pub const MAX_PLAUSIBLE_NG_ML: f64 = 100.0;

const DEFICIENT_BELOW: f64 = 20.0;
const INSUFFICIENT_BELOW: f64 = 30.0;
const SUFFICIENT_UP_TO: f64 = 50.0;

/// Only one report may be uploaded per rolling window of this many days.
pub const REPORT_WINDOW_DAYS: i64 = 30;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VitaminDLevel {
    Deficient,
    Insufficient,
    Sufficient,
    Optimal,
    /// Value was not a finite number.
    Unknown,
}

impl VitaminDLevel {
    pub fn from_ng_ml(value: f64) -> Self {
        if !value.is_finite() {
            return VitaminDLevel::Unknown;
        }
        if value < DEFICIENT_BELOW {
            VitaminDLevel::Deficient
        } else if value < INSUFFICIENT_BELOW {
            VitaminDLevel::Insufficient
        } else if value <= SUFFICIENT_UP_TO {
            VitaminDLevel::Sufficient
        } else {
            VitaminDLevel::Optimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VitaminDLevel::Deficient => "Deficient",
            VitaminDLevel::Insufficient => "Insufficient",
            VitaminDLevel::Sufficient => "Sufficient",
            VitaminDLevel::Optimal => "Optimal",
            VitaminDLevel::Unknown => "Unknown",
        }
    }

    /// Extra safe-exposure minutes recommended at this level.
    pub fn adjustment_minutes(&self) -> i32 {
        match self {
            VitaminDLevel::Deficient => 10,
            VitaminDLevel::Insufficient => 5,
            VitaminDLevel::Sufficient | VitaminDLevel::Optimal | VitaminDLevel::Unknown => 0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            VitaminDLevel::Deficient => {
                "Your vitamin D is low. Slightly longer sun sessions are recommended; talk to your doctor about supplementation."
            }
            VitaminDLevel::Insufficient => {
                "Your vitamin D is below target. A little extra sun time is recommended."
            }
            VitaminDLevel::Sufficient => "Your vitamin D is in the healthy range.",
            VitaminDLevel::Optimal => "Your vitamin D is optimal. Keep up your current routine.",
            VitaminDLevel::Unknown => "The lab value could not be read. No adjustment applied.",
        }
    }
}

/// Classification of a single lab value.
#[derive(Debug, Clone, PartialEq)]
pub struct VitaminDStatus {
    pub level: VitaminDLevel,
    pub status: String,
    pub adjustment: i32,
    pub message: String,
    /// False when the value fell outside 10–100 ng/mL and was clamped.
    pub in_reference_range: bool,
}

/// Classify a 25(OH)D value in ng/mL.
///
/// Values outside the plausible domain are clamped into it and flagged;
/// non-finite values classify as `Unknown` with no adjustment.
pub fn get_vitamin_d_status(value: f64) -> VitaminDStatus {
    let in_reference_range = (MIN_PLAUSIBLE_NG_ML..=MAX_PLAUSIBLE_NG_ML).contains(&value);
    let classified = if value.is_finite() {
        if !in_reference_range {
            tracing::warn!(value, "vitamin D value outside plausible range, clamping");
        }
        value.clamp(MIN_PLAUSIBLE_NG_ML, MAX_PLAUSIBLE_NG_ML)
    } else {
        tracing::warn!(value, "vitamin D value is not a finite number");
        value
    };

    let level = VitaminDLevel::from_ng_ml(classified);
    VitaminDStatus {
        level,
        status: level.label().to_string(),
        adjustment: level.adjustment_minutes(),
        message: level.message().to_string(),
        in_reference_range,
    }
}

/// A single immutable lab measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitaminDReport {
    pub value_ng_ml: f64,
    pub date_unix: i64,
}

impl VitaminDReport {
    pub fn status(&self) -> VitaminDStatus {
        get_vitamin_d_status(self.value_ng_ml)
    }
}

/// The report with the latest date. Reports are superseded, never mutated.
pub fn latest_report(reports: &[VitaminDReport]) -> Option<&VitaminDReport> {
    reports.iter().max_by_key(|r| r.date_unix)
}

/// Adjustment in effect given a report history; zero with no reports.
pub fn current_adjustment(reports: &[VitaminDReport]) -> i32 {
    latest_report(reports)
        .map(|r| r.status().adjustment)
        .unwrap_or(0)
}

/// Earliest time a new report may be uploaded, or `None` if no report
/// exists yet.
pub fn next_upload_allowed_unix(reports: &[VitaminDReport]) -> Option<i64> {
    latest_report(reports)
        .map(|r| r.date_unix.saturating_add(REPORT_WINDOW_DAYS * SECONDS_PER_DAY))
}

pub fn can_upload_report(reports: &[VitaminDReport], now_unix: i64) -> bool {
    match next_upload_allowed_unix(reports) {
        Some(allowed) => now_unix >= allowed,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = SECONDS_PER_DAY;

    fn report(value_ng_ml: f64, date_unix: i64) -> VitaminDReport {
        VitaminDReport {
            value_ng_ml,
            date_unix,
        }
    }

    #[test]
    fn test_deficient() {
        let status = get_vitamin_d_status(15.0);
        assert_eq!(status.status, "Deficient");
        assert!(status.adjustment > 0);
        assert!(status.in_reference_range);
    }

    #[test]
    fn test_sufficient() {
        let status = get_vitamin_d_status(40.0);
        assert_eq!(status.status, "Sufficient");
        assert_eq!(status.adjustment, 0);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(VitaminDLevel::from_ng_ml(19.9), VitaminDLevel::Deficient);
        assert_eq!(VitaminDLevel::from_ng_ml(20.0), VitaminDLevel::Insufficient);
        assert_eq!(VitaminDLevel::from_ng_ml(29.9), VitaminDLevel::Insufficient);
        assert_eq!(VitaminDLevel::from_ng_ml(30.0), VitaminDLevel::Sufficient);
        assert_eq!(VitaminDLevel::from_ng_ml(50.0), VitaminDLevel::Sufficient);
        assert_eq!(VitaminDLevel::from_ng_ml(50.1), VitaminDLevel::Optimal);
    }

    #[test]
    fn test_lower_status_larger_adjustment() {
        let deficient = get_vitamin_d_status(12.0).adjustment;
        let insufficient = get_vitamin_d_status(25.0).adjustment;
        let optimal = get_vitamin_d_status(70.0).adjustment;
        assert!(deficient > insufficient);
        assert!(insufficient > optimal);
        assert_eq!(optimal, 0);
    }

    #[test]
    fn test_out_of_range_clamped_and_flagged() {
        let low = get_vitamin_d_status(3.0);
        assert_eq!(low.level, VitaminDLevel::Deficient);
        assert!(!low.in_reference_range);

        let high = get_vitamin_d_status(250.0);
        assert_eq!(high.level, VitaminDLevel::Optimal);
        assert!(!high.in_reference_range);
    }

    #[test]
    fn test_non_finite_is_unknown() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let status = get_vitamin_d_status(value);
            assert_eq!(status.level, VitaminDLevel::Unknown);
            assert_eq!(status.adjustment, 0);
            assert!(!status.in_reference_range);
        }
    }

    #[test]
    fn test_latest_report_wins() {
        let reports = vec![
            report(45.0, 1_700_000_000),
            report(15.0, 1_700_000_000 + 40 * DAY),
            report(25.0, 1_700_000_000 + 10 * DAY),
        ];
        assert_eq!(latest_report(&reports).unwrap().value_ng_ml, 15.0);
        assert_eq!(current_adjustment(&reports), 10);
    }

    #[test]
    fn test_no_reports() {
        assert!(latest_report(&[]).is_none());
        assert_eq!(current_adjustment(&[]), 0);
        assert_eq!(next_upload_allowed_unix(&[]), None);
        assert!(can_upload_report(&[], 0));
    }

    #[test]
    fn test_upload_window() {
        let t0 = 1_700_000_000;
        let reports = vec![report(30.0, t0)];
        assert!(!can_upload_report(&reports, t0 + DAY));
        assert!(!can_upload_report(&reports, t0 + 30 * DAY - 1));
        assert!(can_upload_report(&reports, t0 + 30 * DAY));
        assert_eq!(next_upload_allowed_unix(&reports), Some(t0 + 30 * DAY));
    }
}
