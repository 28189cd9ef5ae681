//! Error taxonomy for the analysis models.
//!
//! All errors are local, deterministic, and raised synchronously at the
//! point of detection. The models fail loudly rather than returning a
//! sentinel or letting NaN propagate.

use thiserror::Error;

/// Result type for model calculations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur during a model calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// An input value is outside its physically valid domain
    /// (zero/negative power, out-of-range beamwidth, degenerate ratio...).
    #[error("{name} out of valid range: {value}")]
    ValueRange { name: &'static str, value: f64 },

    /// A frequency band label matched neither the named-band table nor the
    /// `"<int>-<int> [K|M|G]?Hz"` pattern.
    #[error("unrecognized frequency band {0:?}")]
    Format(String),

    /// A database integer code has no entry in its enum table.
    #[error("unknown {kind} code {code}")]
    InvalidEnum { kind: &'static str, code: i64 },
}

impl ModelError {
    /// Shorthand for the domain-error variant.
    pub fn value_range(name: &'static str, value: f64) -> Self {
        Self::ValueRange { name, value }
    }
}
