//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Formation category of a raid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormationRole {
    /// Fighter escort: 1–2 aircraft.
    Escort,
    /// Bomber formation: 3–10 aircraft.
    Bomber,
}

impl FormationRole {
    pub const ALL: [FormationRole; 2] = [FormationRole::Escort, FormationRole::Bomber];

    pub fn is_escort(self) -> bool {
        matches!(self, FormationRole::Escort)
    }

    /// Inclusive range of aircraft in a formation of this role.
    pub fn count_range(self) -> (u32, u32) {
        match self {
            FormationRole::Escort => (1, 2),
            FormationRole::Bomber => (3, 10),
        }
    }

    pub fn index(self) -> usize {
        match self {
            FormationRole::Escort => 0,
            FormationRole::Bomber => 1,
        }
    }
}

/// What the receiving station is measuring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationMode {
    #[default]
    RangeFinding,
    HeightFinding,
}

/// How confident the operator can be in a height reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AltitudeConfidence {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
}
