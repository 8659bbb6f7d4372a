use super::TravelMode;
use serde::{Deserialize, Serialize};

/// an unscored route as returned by a routing provider.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProviderRoute {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub travel_mode: TravelMode,
    /// turn-by-turn geometry or step list, passed through unmodified.
    #[serde(default)]
    pub geometry: serde_json::Value,
}

impl ProviderRoute {
    pub fn new(
        distance_km: f64,
        duration_minutes: f64,
        travel_mode: TravelMode,
        geometry: serde_json::Value,
    ) -> ProviderRoute {
        ProviderRoute {
            distance_km,
            duration_minutes,
            travel_mode,
            geometry,
        }
    }

    /// describes why this route cannot be scored, if it cannot.
    /// zero-length routes are degenerate but valid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(format!("invalid route distance {} km", self.distance_km));
        }
        if !self.duration_minutes.is_finite() || self.duration_minutes < 0.0 {
            return Err(format!(
                "invalid route duration {} minutes",
                self.duration_minutes
            ));
        }
        Ok(())
    }
}
