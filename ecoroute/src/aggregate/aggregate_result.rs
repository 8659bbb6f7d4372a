use ecoroute_core::model::{RouteCandidate, TravelMode};
use serde::{Deserialize, Serialize};

/// a travel mode left out of the result set, and why.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UnavailableMode {
    pub mode: TravelMode,
    pub reason: String,
}

impl UnavailableMode {
    pub fn new(mode: TravelMode, reason: String) -> UnavailableMode {
        UnavailableMode { mode, reason }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AggregateResult {
    /// scored candidates, non-increasing in eco score
    pub routes: Vec<RouteCandidate>,
    pub total_co2_saved_kg: f64,
    /// the first driving candidate in provider order, if any
    pub reference_route: Option<RouteCandidate>,
    pub unavailable_modes: Vec<UnavailableMode>,
}
