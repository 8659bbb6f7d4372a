use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// a discrete category of trip, each with its own emission model.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    Walking,
    Cycling,
    Transit,
}

impl TravelMode {
    /// all travel modes, in the order they are requested from a routing provider.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Driving,
        TravelMode::Walking,
        TravelMode::Cycling,
        TravelMode::Transit,
    ];

    pub fn is_driving(&self) -> bool {
        matches!(self, TravelMode::Driving)
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
            TravelMode::Transit => "transit",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" | "drive" => Ok(TravelMode::Driving),
            "walking" | "walk" => Ok(TravelMode::Walking),
            "cycling" | "bike" | "bicycle" => Ok(TravelMode::Cycling),
            "transit" => Ok(TravelMode::Transit),
            other => Err(format!("unknown travel mode '{other}'")),
        }
    }
}
