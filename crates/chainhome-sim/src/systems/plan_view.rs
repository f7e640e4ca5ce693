//! Plan-position display data.
//!
//! Read-only: maps each raid onto north-up display coordinates and marks
//! whether the station could currently see it.

use chainhome_core::constants::*;
use chainhome_core::state::{PlanContact, PlanView, StationControls};
use chainhome_core::types::{normalize_bearing, Target};

use crate::signal::{is_detectable, max_range_for_altitude};

/// Display units per mile.
fn scale() -> f64 {
    (PLAN_VIEW_SIZE / 2.0) / RADAR_RANGE
}

pub fn contact(target: &Target, controls: &StationControls) -> PlanContact {
    let heading = target.bearing.to_radians();
    PlanContact {
        id: target.id,
        east: target.y * scale(),
        north: target.x * scale(),
        heading: (heading.sin(), heading.cos()),
        in_range: target.range() <= max_range_for_altitude(target.altitude),
        detectable: is_detectable(target, controls.goniometer_deg, controls.frequency),
    }
}

pub fn build(targets: &[Target], controls: &StationControls) -> PlanView {
    let gonio = controls.goniometer_deg;
    PlanView {
        contacts: targets.iter().map(|t| contact(t, controls)).collect(),
        goniometer_deg: gonio,
        cone: (
            normalize_bearing(gonio - HEIGHT_FINDING_BEARING_GATE_DEG),
            normalize_bearing(gonio + HEIGHT_FINDING_BEARING_GATE_DEG),
        ),
        coverage: (COVERAGE_ARC_START, COVERAGE_ARC_END),
    }
}
