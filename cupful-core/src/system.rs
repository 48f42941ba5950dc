//! Measurement system tags

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::ConversionError;

/// Measurement convention a unit belongs to; imperial unless asked otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    Metric,
    #[default]
    Imperial,
}

impl System {
    pub const ALL: [System; 2] = [System::Metric, System::Imperial];

    pub fn as_str(&self) -> &'static str {
        match self {
            System::Metric => "metric",
            System::Imperial => "imperial",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for System {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "metric" => Ok(System::Metric),
            "imperial" => Ok(System::Imperial),
            other => Err(ConversionError::UnknownSystem(other.to_string())),
        }
    }
}
