use crate::model::TravelMode;
use serde::{Deserialize, Serialize};

/// categories of travel that use a fixed, population-average emission
/// coefficient instead of a vehicle-specific factor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EmissionMode {
    /// driving with no known vehicle
    Driving,
    Walking,
    Cycling,
    Transit,
    Carpool,
}

impl From<TravelMode> for EmissionMode {
    fn from(value: TravelMode) -> Self {
        match value {
            TravelMode::Driving => EmissionMode::Driving,
            TravelMode::Walking => EmissionMode::Walking,
            TravelMode::Cycling => EmissionMode::Cycling,
            TravelMode::Transit => EmissionMode::Transit,
        }
    }
}

/// kg CO2 per km for each [`EmissionMode`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModeCoefficients {
    pub driving_kg_per_km: f64,
    pub walking_kg_per_km: f64,
    pub cycling_kg_per_km: f64,
    pub transit_kg_per_km: f64,
    /// slightly above transit to account for coordination overhead
    pub carpool_kg_per_km: f64,
}

/// the engine's emission coefficients. these double as the per-mode baselines
/// of the eco score.
pub const DEFAULT_MODE_COEFFICIENTS: ModeCoefficients = ModeCoefficients {
    driving_kg_per_km: 0.12,
    walking_kg_per_km: 0.0,
    cycling_kg_per_km: 0.0,
    transit_kg_per_km: 0.05,
    carpool_kg_per_km: 0.06,
};

impl ModeCoefficients {
    pub fn kg_per_km(&self, mode: EmissionMode) -> f64 {
        match mode {
            EmissionMode::Driving => self.driving_kg_per_km,
            EmissionMode::Walking => self.walking_kg_per_km,
            EmissionMode::Cycling => self.cycling_kg_per_km,
            EmissionMode::Transit => self.transit_kg_per_km,
            EmissionMode::Carpool => self.carpool_kg_per_km,
        }
    }
}

impl Default for ModeCoefficients {
    fn default() -> Self {
        DEFAULT_MODE_COEFFICIENTS
    }
}
