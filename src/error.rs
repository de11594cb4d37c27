use thiserror::Error;

/// Error type for user-entered vitamin-D lab values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabValueError {
    #[error("empty lab value")]
    Empty,

    #[error("malformed lab value: '{0}'")]
    Malformed(String),

    #[error("unknown unit: '{0}'")]
    UnknownUnit(String),

    #[error("lab value {value_ng_ml:.1} ng/mL is outside the plausible range {min}-{max} ng/mL")]
    OutOfRange {
        value_ng_ml: f64,
        min: f64,
        max: f64,
    },
}

/// Error type for loading an exposure policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("policy parse error: {0}")]
    Parse(String),

    #[error("invalid policy: {field} {reason}")]
    Invalid { field: String, reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}
