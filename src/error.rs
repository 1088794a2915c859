#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a run parameter is outside its valid range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Returned when an objective function declares an unusable domain.
    #[error("invalid bounds: low ({low}) must be finite and less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when parsing an objective function name that is not known.
    #[error("unknown objective function '{0}'")]
    UnknownFunction(String),

    /// Returned when a run configuration file cannot be read or parsed.
    #[cfg(feature = "serde")]
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
