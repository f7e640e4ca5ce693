//! Signal model: received echo strength and the height-finding response.
//!
//! Range signal: `direction * range_factor * cross_section * SIGNAL_SCALE`
//! - direction: cos² of the goniometer error (crossed-dipole receiver)
//! - cross section: |sinc(wingspan / wavelength)| + base reflection
//! - range factor: (min(horizon / range, 1))⁴, the round-trip radar equation
//!
//! Both entry points are pure; `Frequency` is validated at construction so
//! the wavelength is always finite and positive here.

use std::f64::consts::PI;

use chainhome_core::constants::*;
use chainhome_core::types::{angle_difference, Frequency, Target};

/// Radio horizon for a target at `altitude_ft` (miles).
pub fn max_range_for_altitude(altitude_ft: f64) -> f64 {
    let altitude_ft = altitude_ft.max(MIN_ALTITUDE);
    HORIZON_COEFFICIENT * altitude_ft.sqrt() * HORIZON_NM_TO_MILES
}

/// Receiver directivity for a given goniometer error in degrees.
pub fn direction_factor(angle_diff_deg: f64) -> f64 {
    angle_diff_deg.to_radians().cos().powi(2)
}

/// sin(πw)/(πw), with the removable singularity at w = 0 filled in.
fn resonance(wingspan_in_wavelengths: f64) -> f64 {
    let arg = PI * wingspan_in_wavelengths;
    if arg == 0.0 {
        1.0
    } else {
        arg.sin() / arg
    }
}

/// Frequency-dependent echoing area relative to the wingspan.
pub fn cross_section_factor(wingspan_m: f64, frequency: Frequency) -> f64 {
    resonance(wingspan_m / frequency.wavelength()).abs() + BASE_REFLECTION
}

/// Fourth-power falloff beyond the radio horizon, capped at 1 inside it.
pub fn range_factor(range: f64, altitude_ft: f64) -> f64 {
    (max_range_for_altitude(altitude_ft) / range).min(1.0).powi(4)
}

/// Received signal strength for a target with the goniometer at
/// `goniometer_deg`. Never negative.
pub fn signal_strength(target: &Target, goniometer_deg: f64, frequency: Frequency) -> f64 {
    let diff = angle_difference(target.computed_bearing(), goniometer_deg);
    direction_factor(diff)
        * range_factor(target.range(), target.altitude)
        * cross_section_factor(target.wingspan, frequency)
        * SIGNAL_SCALE
}

/// Height-finding response for a target with the vertical goniometer set to
/// `vertical_goniometer_deg`.
///
/// Zero unless height finding is enabled and the target lies within the
/// bearing gate of the horizontal goniometer.
pub fn height_finding_signal(
    target: &Target,
    goniometer_deg: f64,
    vertical_goniometer_deg: f64,
    frequency: Frequency,
    height_finding: bool,
) -> f64 {
    if !height_finding {
        return 0.0;
    }
    let diff = angle_difference(target.computed_bearing(), goniometer_deg);
    if diff > HEIGHT_FINDING_BEARING_GATE_DEG {
        return 0.0;
    }

    let elevation_rad = target.altitude_miles().atan2(target.range());
    let elevation_deg = elevation_rad.to_degrees();

    let height_in_wavelengths = target.altitude * METERS_PER_FOOT / frequency.wavelength();
    let lobe_pattern = (PI * height_in_wavelengths * elevation_rad.sin()).sin().abs();

    let delta = elevation_deg - vertical_goniometer_deg;
    let match_factor = (-delta * delta / VERTICAL_MATCH_WIDTH).exp();

    lobe_pattern * match_factor * HEIGHT_SIGNAL_SCALE
}

/// Whether a target's echo rises above the scope's detection threshold.
pub fn is_detectable(target: &Target, goniometer_deg: f64, frequency: Frequency) -> bool {
    signal_strength(target, goniometer_deg, frequency) > DETECTION_THRESHOLD
}
