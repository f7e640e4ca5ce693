//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FREQUENCY_MHZ, FEET_PER_MILE, MAX_VERTICAL_GONIOMETER_DEG, SECONDS_PER_HOUR,
    WAVELENGTH_NUMERATOR,
};
use crate::error::SignalError;

/// A raid tracked by the station.
///
/// Position is in miles with the station at the origin: `x` is the north
/// component and `y` the east component. Only `x` and `y` change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Raid number in 100..=999. Not guaranteed unique.
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Approach bearing in degrees, fixed at creation.
    pub bearing: f64,
    /// Miles per simulated second.
    pub speed: f64,
    /// Feet.
    pub altitude: f64,
    pub aircraft_type: String,
    /// Meters.
    pub wingspan: f64,
    /// Aircraft in the formation.
    pub count: u32,
    pub is_escort: bool,
}

impl Target {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Distance from the station (miles).
    pub fn range(&self) -> f64 {
        self.position().length()
    }

    /// Bearing of the target as seen from the station, degrees in [0, 360).
    pub fn computed_bearing(&self) -> f64 {
        self.y.atan2(self.x).to_degrees().rem_euclid(360.0)
    }

    pub fn speed_mph(&self) -> f64 {
        self.speed * SECONDS_PER_HOUR
    }

    pub fn altitude_miles(&self) -> f64 {
        self.altitude / FEET_PER_MILE
    }

    /// Angle of the target above the horizon (degrees).
    pub fn elevation_deg(&self) -> f64 {
        self.altitude_miles().atan2(self.range()).to_degrees()
    }
}

/// Smaller angle between two bearings, degrees in [0, 180].
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Validated transmitter frequency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Frequency(f64);

impl Frequency {
    pub fn from_mhz(mhz: f64) -> Result<Self, SignalError> {
        if !mhz.is_finite() || mhz <= 0.0 {
            return Err(SignalError::InvalidFrequency(mhz));
        }
        Ok(Self(mhz))
    }

    pub fn mhz(self) -> f64 {
        self.0
    }

    /// Wavelength in meters.
    pub fn wavelength(self) -> f64 {
        WAVELENGTH_NUMERATOR / self.0
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self(DEFAULT_FREQUENCY_MHZ)
    }
}

impl TryFrom<f64> for Frequency {
    type Error = SignalError;

    fn try_from(mhz: f64) -> Result<Self, Self::Error> {
        Self::from_mhz(mhz)
    }
}

impl From<Frequency> for f64 {
    fn from(frequency: Frequency) -> Self {
        frequency.0
    }
}

/// Reject non-finite operator angles.
pub fn check_angle(degrees: f64) -> Result<f64, SignalError> {
    if degrees.is_finite() {
        Ok(degrees)
    } else {
        Err(SignalError::NonFiniteAngle(degrees))
    }
}

/// Reject time steps that are negative or not finite.
pub fn check_time_step(dt: f64) -> Result<f64, SignalError> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(dt)
    } else {
        Err(SignalError::InvalidTimeStep(dt))
    }
}

/// Normalize a goniometer bearing into [0, 360).
pub fn normalize_bearing(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Clamp a vertical goniometer setting into [0, 90].
pub fn clamp_elevation(degrees: f64) -> f64 {
    degrees.clamp(0.0, MAX_VERTICAL_GONIOMETER_DEG)
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Ticks since power-on.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
