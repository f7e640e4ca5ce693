//! Operator analysis report: the raid table and filter-room summary.

use chainhome_core::constants::*;
use chainhome_core::enums::AltitudeConfidence;
use chainhome_core::state::{
    AnalysisReport, AnalysisRow, AnalysisSummary, FilterReport, StationControls,
};
use chainhome_core::types::Target;

use crate::signal::{height_finding_signal, signal_strength};

/// Grade a height-finding response. Always `Unknown` outside height finding.
pub fn altitude_confidence(height_signal: f64, height_finding: bool) -> AltitudeConfidence {
    if !height_finding {
        AltitudeConfidence::Unknown
    } else if height_signal > CONFIDENCE_HIGH {
        AltitudeConfidence::High
    } else if height_signal > CONFIDENCE_MEDIUM {
        AltitudeConfidence::Medium
    } else if height_signal > CONFIDENCE_LOW {
        AltitudeConfidence::Low
    } else {
        AltitudeConfidence::Unknown
    }
}

fn row(target: &Target, controls: &StationControls) -> AnalysisRow {
    let signal = signal_strength(target, controls.goniometer_deg, controls.frequency);
    let height_signal = height_finding_signal(
        target,
        controls.goniometer_deg,
        controls.vertical_goniometer_deg,
        controls.frequency,
        controls.height_finding(),
    );
    AnalysisRow {
        raid: target.id,
        range_mi: target.range(),
        bearing_deg: target.computed_bearing(),
        altitude_ft: target.altitude,
        speed_mph: target.speed_mph(),
        aircraft_type: target.aircraft_type.clone(),
        count: target.count,
        signal,
        detectable: signal > DETECTION_THRESHOLD,
        altitude_confidence: altitude_confidence(height_signal, controls.height_finding()),
    }
}

pub fn filter_report(targets: &[Target]) -> FilterReport {
    FilterReport {
        large_bomber_formation: targets
            .iter()
            .any(|t| !t.is_escort && t.count > LARGE_FORMATION_COUNT),
        fighter_escort: targets.iter().any(|t| t.is_escort),
        high_speed_aircraft: targets.iter().any(|t| t.speed_mph() > HIGH_SPEED_MPH),
    }
}

/// Build the report with the closest raid first.
pub fn build_report(targets: &[Target], controls: &StationControls) -> AnalysisReport {
    let mut rows: Vec<AnalysisRow> = targets.iter().map(|t| row(t, controls)).collect();
    rows.sort_by(|a, b| a.range_mi.total_cmp(&b.range_mi));

    AnalysisReport {
        rows,
        summary: AnalysisSummary {
            total_raids: targets.len(),
            aircraft_count: targets.iter().map(|t| t.count).sum(),
            frequency_mhz: controls.frequency.mhz(),
            mode: controls.mode,
        },
        filter: filter_report(targets),
    }
}
