//! Error types for configuration loading and signal inputs.

use thiserror::Error;

use crate::enums::FormationRole;

/// Station configuration could not be loaded or failed validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("aircraft table has no {0:?} entry")]
    MissingRole(FormationRole),

    #[error("aircraft '{name}': {field} range {min}..{max} is invalid")]
    InvalidRange {
        name: String,
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("aircraft '{name}': wingspan {wingspan} m must be positive")]
    InvalidWingspan { name: String, wingspan: f64 },

    #[error("{name} probability {value} must be within 0..=1")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("frequency list is empty")]
    NoFrequencies,

    #[error("invalid frequency in configuration: {0}")]
    Frequency(#[from] SignalError),

    #[error("failed to parse station TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read station config: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed input to the signal model or the operator controls.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SignalError {
    #[error("frequency {0} MHz must be finite and positive")]
    InvalidFrequency(f64),

    #[error("{0} MHz is not a selectable frequency")]
    UnsupportedFrequency(f64),

    #[error("angle {0} is not finite")]
    NonFiniteAngle(f64),

    #[error("time step {0} s must be finite and non-negative")]
    InvalidTimeStep(f64),
}
