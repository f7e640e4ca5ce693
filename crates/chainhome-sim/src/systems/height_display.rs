//! Height-finding display: response against elevation angle.
//!
//! Each column is an elevation sample from 0° to 90°. A raid contributes only
//! near its own elevation and inside the horizontal bearing gate, so the
//! operator sees a peak where the vertical goniometer setting would match.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chainhome_core::constants::*;
use chainhome_core::state::{HeightTraceView, StationControls, TracePoint};
use chainhome_core::types::{angle_difference, Frequency, Target};

use crate::signal::height_finding_signal;

pub fn baseline() -> f64 {
    SCOPE_HEIGHT / 2.0 - 10.0
}

/// Elevation (degrees) sampled at a display column.
pub fn column_elevation(column: f64) -> f64 {
    column / SWEEP_WIDTH as f64 * HEIGHT_DISPLAY_MAX_ELEVATION_DEG
}

/// Sample the elevation trace across the full display.
pub fn elevation_trace(
    targets: &[Target],
    controls: &StationControls,
    rng: &mut ChaCha8Rng,
) -> Vec<TracePoint> {
    let candidates: Vec<(&Target, f64)> = targets
        .iter()
        .filter(|t| {
            angle_difference(t.computed_bearing(), controls.goniometer_deg)
                < HEIGHT_FINDING_BEARING_GATE_DEG
        })
        .map(|t| (t, t.elevation_deg()))
        .collect();

    let base = baseline();
    (0..SWEEP_WIDTH)
        .map(|column| {
            let x = column as f64;
            let sampled = column_elevation(x);
            let signal = candidates
                .iter()
                .filter(|(_, elevation)| (elevation - sampled).abs() < HEIGHT_SAMPLE_WINDOW_DEG)
                .map(|(t, _)| {
                    height_finding_signal(
                        t,
                        controls.goniometer_deg,
                        sampled,
                        controls.frequency,
                        controls.height_finding(),
                    )
                })
                .fold(0.0, f64::max);
            let noise = (rng.gen::<f64>() - 0.5) * HEIGHT_DISPLAY_NOISE;
            TracePoint {
                x,
                y: base - signal * SCOPE_HEIGHT * HEIGHT_TRACE_GAIN + noise,
            }
        })
        .collect()
}

/// Theoretical ground-reflection lobe strength (0..1) at an elevation.
pub fn reference_lobe(frequency: Frequency, elevation_rad: f64) -> f64 {
    let path_difference = 2.0 * TRANSMITTER_MAST_HEIGHT_M * elevation_rad.sin();
    (PI * path_difference / frequency.wavelength()).sin().powi(2)
}

/// Reference lobe pattern sampled once per display column.
pub fn reference_lobe_pattern(frequency: Frequency) -> Vec<f64> {
    (0..SWEEP_WIDTH)
        .map(|column| reference_lobe(frequency, column_elevation(column as f64).to_radians()))
        .collect()
}

/// Altitude (feet, rounded) of a raid seen at `elevation_deg` and `range_mi`.
pub fn altitude_from_elevation(elevation_deg: f64, range_mi: f64) -> f64 {
    (range_mi * elevation_deg.to_radians().tan() * FEET_PER_MILE).round()
}

/// Operator's conversion card: (elevation°, altitude ft) at a fixed range.
pub fn altitude_reference(range_mi: f64) -> Vec<(f64, f64)> {
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|angle| (angle, altitude_from_elevation(angle, range_mi)))
        .collect()
}

/// Full height-finding view, or `None` outside height-finding mode.
pub fn build_view(
    targets: &[Target],
    controls: &StationControls,
    rng: &mut ChaCha8Rng,
) -> Option<HeightTraceView> {
    if !controls.height_finding() {
        return None;
    }
    Some(HeightTraceView {
        trace: elevation_trace(targets, controls, rng),
        reference_lobes: reference_lobe_pattern(controls.frequency),
        vertical_goniometer_deg: controls.vertical_goniometer_deg,
    })
}
