use super::TravelMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_WALKING_DISTANCE_KM: f64 = 2.0;
pub const DEFAULT_MAX_CYCLING_DISTANCE_KM: f64 = 10.0;

/// travel preferences for a single traveler. fields missing from a stored
/// record are filled with the default profile values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TravelerPreferences {
    pub max_walking_distance_km: f64,
    pub max_cycling_distance_km: f64,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub prefer_eco_routes: bool,
    pub default_travel_mode: TravelMode,
}

impl Default for TravelerPreferences {
    fn default() -> Self {
        Self {
            max_walking_distance_km: DEFAULT_MAX_WALKING_DISTANCE_KM,
            max_cycling_distance_km: DEFAULT_MAX_CYCLING_DISTANCE_KM,
            avoid_tolls: false,
            avoid_highways: false,
            prefer_eco_routes: true,
            default_travel_mode: TravelMode::Driving,
        }
    }
}
