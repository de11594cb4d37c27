//! Completed exposure sessions and history statistics.
//!
//! This module provides pure functions over session records. Persistence
//! and the retention job are the host's concern; `retain_recent` only
//! decides which records fall inside the window.

use serde::{Deserialize, Serialize};

use crate::score::{calculate_exposure_score, ExposureStatus};

/// Default retention window for the history view.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;
const SECONDS_PER_DAY: i64 = 86_400;

/// A timer session as it completed.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInput {
    pub uv_index: f64,
    /// Minutes actually spent in the sun
    pub duration_minutes: f64,
    pub skin_type: u8,
    pub sunscreen: bool,
    pub cloudy: bool,
}

/// Immutable record of a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    pub uv_index: f64,
    pub duration_minutes: f64,
    pub skin_type: u8,
    pub sunscreen: bool,
    pub cloudy: bool,
    pub exposure_score: f64,
    pub raw_exposure: f64,
    pub exposure_status: ExposureStatus,
    pub recommendation: String,
    /// Completion time as Unix timestamp
    pub date_unix: i64,
}

impl SessionLog {
    /// Score a completed session and freeze the result.
    pub fn record(input: &SessionInput, date_unix: i64) -> Self {
        let score = calculate_exposure_score(
            input.duration_minutes,
            input.uv_index,
            input.skin_type,
            input.sunscreen,
            input.cloudy,
        );
        SessionLog {
            uv_index: input.uv_index,
            duration_minutes: input.duration_minutes,
            skin_type: input.skin_type,
            sunscreen: input.sunscreen,
            cloudy: input.cloudy,
            exposure_score: score.score,
            raw_exposure: score.raw_exposure,
            exposure_status: score.status,
            recommendation: score.recommendation,
            date_unix,
        }
    }

    /// True if the session completed within `window_days` before `now_unix`.
    pub fn is_within(&self, now_unix: i64, window_days: u32) -> bool {
        let start = now_unix.saturating_sub(window_days as i64 * SECONDS_PER_DAY);
        self.date_unix > start && self.date_unix <= now_unix
    }
}

/// Sessions that fall inside the retention window, oldest first.
pub fn retain_recent(logs: &[SessionLog], now_unix: i64, window_days: u32) -> Vec<SessionLog> {
    let mut recent: Vec<SessionLog> = logs
        .iter()
        .filter(|log| log.is_within(now_unix, window_days))
        .cloned()
        .collect();
    recent.sort_by_key(|log| log.date_unix);
    recent
}

/// Aggregate statistics over a history window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryStats {
    pub session_count: u32,
    pub total_minutes: f64,
    pub average_score: f64,
    pub max_score: f64,
    pub max_uv_index: f64,
    pub safe_sessions: u32,
    pub moderate_sessions: u32,
    pub high_risk_sessions: u32,
}

impl HistoryStats {
    /// Compute statistics over the sessions inside the window.
    pub fn compute(logs: &[SessionLog], now_unix: i64, window_days: u32) -> Self {
        let mut stats = HistoryStats::default();
        let mut score_sum: f64 = 0.0;

        for log in logs.iter().filter(|l| l.is_within(now_unix, window_days)) {
            stats.session_count += 1;
            stats.total_minutes += log.duration_minutes.max(0.0);
            score_sum += log.exposure_score;

            if log.exposure_score > stats.max_score {
                stats.max_score = log.exposure_score;
            }
            if log.uv_index > stats.max_uv_index {
                stats.max_uv_index = log.uv_index;
            }

            match log.exposure_status {
                ExposureStatus::Safe => stats.safe_sessions += 1,
                ExposureStatus::Moderate => stats.moderate_sessions += 1,
                ExposureStatus::HighRisk => stats.high_risk_sessions += 1,
            }
        }

        if stats.session_count > 0 {
            stats.average_score = score_sum / stats.session_count as f64;
        }

        tracing::debug!(
            sessions = stats.session_count,
            window_days,
            "computed exposure history"
        );
        stats
    }
}
