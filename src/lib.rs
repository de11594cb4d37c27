//! Stateless compute core for safe sun-exposure estimation.
//!
//! ```
//! use sunsafe_compute::{calculate_safe_time, get_vitamin_d_status};
//!
//! let adjustment = get_vitamin_d_status(15.0).adjustment;
//! let minutes = calculate_safe_time(6.0, 3, false, false, adjustment, false);
//! assert_eq!(minutes, 25);
//! ```

pub mod error;
pub mod lab_value;
pub mod policy;
pub mod safe_time;
pub mod score;
pub mod session;
pub mod skin;
pub mod uv;
pub mod vitamin_d;

uniffi::include_scaffolding!("sunsafe");

pub use error::{ConfigError, LabValueError};
pub use policy::ExposurePolicy;
pub use safe_time::{calculate_safe_time, ExposureCalculator, SafeTimeInput};
pub use score::{calculate_exposure_score, ExposureScore, ExposureStatus};
pub use session::{HistoryStats, SessionInput, SessionLog};
pub use skin::{get_skin_type_description, SkinType};
pub use uv::{categorize_uv, UvCategory, UvLevel};
pub use vitamin_d::{get_vitamin_d_status, VitaminDLevel, VitaminDReport, VitaminDStatus};

// Owned-argument entry points for the FFI layer.

pub fn get_skin_multiplier(skin_type: u8) -> f64 {
    skin::skin_multiplier(skin_type)
}

pub fn parse_lab_value(input: String) -> Result<f64, LabValueError> {
    lab_value::parse_lab_value(&input)
}

pub fn current_vitamin_d_adjustment(reports: Vec<VitaminDReport>) -> i32 {
    vitamin_d::current_adjustment(&reports)
}

pub fn can_upload_report(reports: Vec<VitaminDReport>, now_unix: i64) -> bool {
    vitamin_d::can_upload_report(&reports, now_unix)
}

pub fn record_session(input: SessionInput, date_unix: i64) -> SessionLog {
    SessionLog::record(&input, date_unix)
}

pub fn compute_history(logs: Vec<SessionLog>, now_unix: i64, window_days: u32) -> HistoryStats {
    HistoryStats::compute(&logs, now_unix, window_days)
}
