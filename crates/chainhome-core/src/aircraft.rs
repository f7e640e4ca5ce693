//! Aircraft type table.
//!
//! The table is indexed by [`FormationRole`] and validated when it is built,
//! so every role is guaranteed to have at least one aircraft to choose from.

use serde::{Deserialize, Serialize};

use crate::enums::FormationRole;
use crate::error::ConfigError;

/// Static description of an aircraft type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftType {
    #[serde(rename = "type")]
    pub name: String,
    /// mph.
    pub min_speed: f64,
    pub max_speed: f64,
    /// Feet.
    pub min_alt: f64,
    pub max_alt: f64,
    pub is_escort: bool,
    /// Meters.
    pub wingspan: f64,
}

impl AircraftType {
    pub fn role(&self) -> FormationRole {
        if self.is_escort {
            FormationRole::Escort
        } else {
            FormationRole::Bomber
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_range(&self.name, "speed", self.min_speed, self.max_speed)?;
        check_range(&self.name, "altitude", self.min_alt, self.max_alt)?;
        if !(self.wingspan.is_finite() && self.wingspan > 0.0) {
            return Err(ConfigError::InvalidWingspan {
                name: self.name.clone(),
                wingspan: self.wingspan,
            });
        }
        Ok(())
    }
}

fn check_range(name: &str, field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min > 0.0 && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            name: name.to_string(),
            field,
            min,
            max,
        })
    }
}

/// Aircraft types grouped by formation role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AircraftType>", into = "Vec<AircraftType>")]
pub struct AircraftTable {
    by_role: [Vec<AircraftType>; 2],
}

impl AircraftTable {
    /// Build a table, rejecting malformed entries and empty roles.
    pub fn new(entries: Vec<AircraftType>) -> Result<Self, ConfigError> {
        let mut by_role: [Vec<AircraftType>; 2] = [Vec::new(), Vec::new()];
        for entry in entries {
            entry.validate()?;
            by_role[entry.role().index()].push(entry);
        }
        for role in FormationRole::ALL {
            if by_role[role.index()].is_empty() {
                return Err(ConfigError::MissingRole(role));
            }
        }
        Ok(Self { by_role })
    }

    /// Aircraft available for a role. Never empty.
    pub fn entries(&self, role: FormationRole) -> &[AircraftType] {
        &self.by_role[role.index()]
    }

    pub fn len(&self) -> usize {
        self.by_role.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AircraftTable {
    fn default() -> Self {
        let [escort, bomber] = default_aircraft();
        Self {
            by_role: [vec![escort], vec![bomber]],
        }
    }
}

impl TryFrom<Vec<AircraftType>> for AircraftTable {
    type Error = ConfigError;

    fn try_from(entries: Vec<AircraftType>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<AircraftTable> for Vec<AircraftType> {
    fn from(table: AircraftTable) -> Self {
        let [escort, bomber] = table.by_role;
        escort.into_iter().chain(bomber).collect()
    }
}

/// The shipped aircraft: one escort fighter and one bomber.
pub fn default_aircraft() -> [AircraftType; 2] {
    [
        AircraftType {
            name: "Bf 109 E".to_string(),
            min_speed: 300.0,
            max_speed: 350.0,
            min_alt: 15_000.0,
            max_alt: 30_000.0,
            is_escort: true,
            wingspan: 9.87,
        },
        AircraftType {
            name: "He 111".to_string(),
            min_speed: 230.0,
            max_speed: 255.0,
            min_alt: 13_000.0,
            max_alt: 22_000.0,
            is_escort: false,
            wingspan: 22.5,
        },
    ]
}
