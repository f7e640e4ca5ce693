//! Operator commands sent to the station.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Station ---
    /// Switch the transmitter on or off.
    SetPower { on: bool },
    /// Select a transmitter frequency (MHz). Must be one of the configured list.
    SetFrequency { mhz: f64 },

    // --- Receiver ---
    /// Point the horizontal goniometer (degrees).
    SetGoniometer { degrees: f64 },
    /// Set the vertical goniometer elevation (degrees, 0–90).
    SetVerticalGoniometer { degrees: f64 },
    /// Switch between range finding and height finding.
    SetHeightFinding { enabled: bool },

    // --- Display ---
    /// Show or hide the operator analysis report.
    SetAnalysisVisible { visible: bool },
}
