//! Runtime station configuration.
//!
//! [`StationConfig`] mirrors the tunable subset of [`crate::constants`] plus the
//! aircraft table. It can be parsed from TOML; any key left out falls back to
//! the compile-time default, so a file can override just the values it cares
//! about:
//!
//! ```toml
//! frequencies_mhz = [20.0, 25.0]
//! escort_probability = 0.5
//!
//! [[aircraft]]
//! type = "Do 17"
//! min_speed = 200.0
//! max_speed = 255.0
//! min_alt = 10000.0
//! max_alt = 20000.0
//! is_escort = false
//! wingspan = 18.0
//! ```
//!
//! A file that lists `[[aircraft]]` replaces the whole table, and the table
//! must still contain at least one escort and one bomber.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aircraft::AircraftTable;
use crate::constants::*;
use crate::error::{ConfigError, SignalError};
use crate::types::Frequency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub aircraft: AircraftTable,
    /// Frequencies the operator may select (MHz).
    pub frequencies_mhz: Vec<f64>,
    /// Frequency selected at power-on (MHz).
    pub default_frequency_mhz: f64,
    pub escort_probability: f64,
    pub spawn_probability: f64,
    pub min_targets: usize,
    pub initial_targets_spread: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            aircraft: AircraftTable::default(),
            frequencies_mhz: FREQUENCIES_MHZ.to_vec(),
            default_frequency_mhz: DEFAULT_FREQUENCY_MHZ,
            escort_probability: ESCORT_PROBABILITY,
            spawn_probability: SPAWN_PROBABILITY,
            min_targets: MIN_TARGETS,
            initial_targets_spread: INITIAL_TARGETS_SPREAD,
        }
    }
}

impl StationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: StationConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frequencies_mhz.is_empty() {
            return Err(ConfigError::NoFrequencies);
        }
        for &mhz in &self.frequencies_mhz {
            Frequency::from_mhz(mhz)?;
        }
        self.frequency(self.default_frequency_mhz)?;
        check_probability("escort", self.escort_probability)?;
        check_probability("spawn", self.spawn_probability)?;
        Ok(())
    }

    /// Look up a selectable frequency.
    pub fn frequency(&self, mhz: f64) -> Result<Frequency, SignalError> {
        let frequency = Frequency::from_mhz(mhz)?;
        if self.frequencies_mhz.iter().any(|&f| f == mhz) {
            Ok(frequency)
        } else {
            Err(SignalError::UnsupportedFrequency(mhz))
        }
    }

    pub fn default_frequency(&self) -> Result<Frequency, SignalError> {
        self.frequency(self.default_frequency_mhz)
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}
