//! Station constants and tuning parameters.

// --- Radar ---

/// Maximum displayed range of the station (miles).
pub const RADAR_RANGE: f64 = 150.0;

/// Lowest altitude the model considers (feet).
pub const MIN_ALTITUDE: f64 = 1000.0;

/// Highest altitude the model considers (feet).
pub const MAX_ALTITUDE: f64 = 30_000.0;

/// Targets closer than this have overflown the station and are removed (miles).
pub const OVERFLIGHT_RANGE: f64 = 5.0;

/// Received signal above this level shows on the scope.
pub const DETECTION_THRESHOLD: f64 = 0.1;

/// Arbitrary display calibration for the range signal.
pub const SIGNAL_SCALE: f64 = 3.0;

/// Arbitrary display calibration for the height-finding signal.
pub const HEIGHT_SIGNAL_SCALE: f64 = 2.0;

/// Non-resonant reflection floor added to the cross-section factor.
pub const BASE_REFLECTION: f64 = 0.2;

/// Height finding only works on targets within this many degrees of the goniometer.
pub const HEIGHT_FINDING_BEARING_GATE_DEG: f64 = 15.0;

/// Width parameter of the vertical goniometer match, exp(-d²/W).
pub const VERTICAL_MATCH_WIDTH: f64 = 100.0;

/// Speed of light expressed so that wavelength (m) = this / frequency (MHz).
pub const WAVELENGTH_NUMERATOR: f64 = 300.0;

// --- Units ---

pub const FEET_PER_MILE: f64 = 5280.0;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// --- Radio horizon ---

/// Nautical-mile horizon coefficient: range_nm = 1.23 * sqrt(altitude_ft).
pub const HORIZON_COEFFICIENT: f64 = 1.23;

/// Nautical-mile to statute-mile factor applied to the horizon range.
pub const HORIZON_NM_TO_MILES: f64 = 1.15;

// --- Coverage ---

/// Start of the station's coverage arc (degrees).
pub const COVERAGE_ARC_START: f64 = 110.0;

/// End of the station's coverage arc (degrees).
pub const COVERAGE_ARC_END: f64 = 210.0;

// --- Frequencies ---

/// Selectable transmitter frequencies (MHz).
pub const FREQUENCIES_MHZ: [f64; 4] = [20.0, 22.0, 25.0, 30.0];

/// Frequency selected at power-on (MHz).
pub const DEFAULT_FREQUENCY_MHZ: f64 = 20.0;

// --- Operator controls ---

pub const DEFAULT_GONIOMETER_DEG: f64 = 160.0;
pub const DEFAULT_VERTICAL_GONIOMETER_DEG: f64 = 45.0;
pub const MAX_VERTICAL_GONIOMETER_DEG: f64 = 90.0;

// --- Population ---

/// Probability that a new raid is a fighter escort formation.
pub const ESCORT_PROBABILITY: f64 = 0.3;

/// Targets seeded at power-on: 1 + floor(U * this).
pub const INITIAL_TARGETS_SPREAD: u32 = 5;

/// Below this many targets the station may spawn a new raid.
pub const MIN_TARGETS: usize = 2;

/// Per-motion-step chance of spawning when below MIN_TARGETS.
pub const SPAWN_PROBABILITY: f64 = 0.3;

/// Raid numbers are drawn from this inclusive range.
pub const RAID_ID_MIN: u32 = 100;
pub const RAID_ID_MAX: u32 = 999;

// --- Timers ---

/// Sweep (display) timer rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per sweep tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Target motion step (seconds), i.e. a 10 Hz motion timer.
pub const MOTION_DT: f64 = 0.1;

/// Longest span a single engine tick will simulate (seconds). Longer ticks
/// are truncated so catch-up work stays bounded.
pub const MAX_TICK_SECS: f64 = 10.0;

/// Time for the trace to cross the full scope (seconds).
pub const SWEEP_DURATION_SECS: f64 = 2.0;

/// Interval between interference updates (seconds).
pub const INTERFERENCE_INTERVAL_SECS: f64 = 5.0;

/// Interference never exceeds this level.
pub const MAX_INTERFERENCE: f64 = 0.5;

// --- Display geometry ---

/// A-scope width in columns.
pub const SWEEP_WIDTH: usize = 1200;

/// A-scope height in rows.
pub const SCOPE_HEIGHT: f64 = 300.0;

/// Plan-position display edge length.
pub const PLAN_VIEW_SIZE: f64 = 400.0;

/// Number of faded traces kept for phosphor persistence.
pub const MAX_PREVIOUS_TRACES: usize = 3;

/// A target paints on the A-scope within this many miles of a column's range.
pub const ASCOPE_PEAK_HALF_WIDTH_MI: f64 = 2.0;

/// Peak deflection as a fraction of scope height per unit of signal.
pub const ASCOPE_PEAK_GAIN: f64 = 0.35;

/// Amplitude of the A-scope baseline grass.
pub const ASCOPE_NOISE: f64 = 8.5;

/// Height display samples targets within this many degrees of their elevation.
pub const HEIGHT_SAMPLE_WINDOW_DEG: f64 = 5.0;

/// Peak deflection on the height display per unit of signal.
pub const HEIGHT_TRACE_GAIN: f64 = 0.4;

/// Maximum elevation shown on the height display (degrees).
pub const HEIGHT_DISPLAY_MAX_ELEVATION_DEG: f64 = 90.0;

/// Amplitude of the height display noise.
pub const HEIGHT_DISPLAY_NOISE: f64 = 5.0;

/// Height of the transmitter mast used for the reference lobe pattern (meters).
pub const TRANSMITTER_MAST_HEIGHT_M: f64 = 110.0;

// --- Analysis ---

pub const CONFIDENCE_HIGH: f64 = 0.5;
pub const CONFIDENCE_MEDIUM: f64 = 0.2;
pub const CONFIDENCE_LOW: f64 = 0.1;

/// Non-escort raids larger than this count as a large bomber formation.
pub const LARGE_FORMATION_COUNT: u32 = 5;

/// Raids faster than this count as high-speed (mph).
pub const HIGH_SPEED_MPH: f64 = 300.0;
