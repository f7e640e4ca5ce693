//! Station snapshot: the complete visible state handed to displays after each tick.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GONIOMETER_DEG, DEFAULT_VERTICAL_GONIOMETER_DEG};
use crate::enums::*;
use crate::types::{Frequency, SimTime, Target};

/// Operator control settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationControls {
    pub frequency: Frequency,
    /// Horizontal goniometer bearing, degrees in [0, 360).
    pub goniometer_deg: f64,
    /// Vertical goniometer elevation, degrees in [0, 90].
    pub vertical_goniometer_deg: f64,
    pub mode: StationMode,
    pub show_analysis: bool,
}

impl StationControls {
    pub fn height_finding(&self) -> bool {
        self.mode == StationMode::HeightFinding
    }
}

impl Default for StationControls {
    fn default() -> Self {
        Self {
            frequency: Frequency::default(),
            goniometer_deg: DEFAULT_GONIOMETER_DEG,
            vertical_goniometer_deg: DEFAULT_VERTICAL_GONIOMETER_DEG,
            mode: StationMode::default(),
            show_analysis: false,
        }
    }
}

/// Complete station state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationSnapshot {
    pub time: SimTime,
    pub powered: bool,
    pub controls: StationControls,
    pub targets: Vec<Target>,
    /// Current sweep column on the A-scope.
    pub sweep_position: f64,
    pub ascope: AScopeView,
    /// Elevation trace, present only in height-finding mode.
    pub height_trace: Option<HeightTraceView>,
    pub plan: PlanView,
    pub interference: f64,
    /// Operator report, present only while the analysis panel is shown.
    pub report: Option<AnalysisReport>,
}

/// One sample on a display trace. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub x: f64,
    pub y: f64,
}

/// A completed sweep kept for phosphor persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredTrace {
    pub points: Vec<TracePoint>,
    /// Simulated time the sweep completed.
    pub completed_at_secs: f64,
}

/// Range display data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AScopeView {
    pub current: Vec<TracePoint>,
    /// Oldest first.
    pub previous: Vec<StoredTrace>,
    /// Fade opacity per previous trace, same order.
    pub previous_opacity: Vec<f64>,
}

/// Height-finding display data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeightTraceView {
    /// Measured trace: one point per elevation column.
    pub trace: Vec<TracePoint>,
    /// Theoretical lobe pattern for the selected frequency, 0..1 per column.
    pub reference_lobes: Vec<f64>,
    pub vertical_goniometer_deg: f64,
}

/// A target plotted on the plan-position display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanContact {
    pub id: u32,
    /// Display offset east of the station.
    pub east: f64,
    /// Display offset north of the station.
    pub north: f64,
    /// Unit vector of the approach bearing (east, north).
    pub heading: (f64, f64),
    pub in_range: bool,
    pub detectable: bool,
}

/// Plan-position display data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanView {
    pub contacts: Vec<PlanContact>,
    pub goniometer_deg: f64,
    /// Reception cone edges (degrees).
    pub cone: (f64, f64),
    /// Station coverage arc (degrees).
    pub coverage: (f64, f64),
}

/// One row of the operator analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub raid: u32,
    pub range_mi: f64,
    pub bearing_deg: f64,
    pub altitude_ft: f64,
    pub speed_mph: f64,
    pub aircraft_type: String,
    pub count: u32,
    pub signal: f64,
    pub detectable: bool,
    pub altitude_confidence: AltitudeConfidence,
}

/// Operational summary of all raids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_raids: usize,
    pub aircraft_count: u32,
    pub frequency_mhz: f64,
    pub mode: StationMode,
}

/// What the filter room would be told about the formations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    pub large_bomber_formation: bool,
    pub fighter_escort: bool,
    pub high_speed_aircraft: bool,
}

/// Operator analysis report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Closest raid first.
    pub rows: Vec<AnalysisRow>,
    pub summary: AnalysisSummary,
    pub filter: FilterReport,
}
