use super::{ProviderRoute, TravelMode};
use crate::score::eco_score;
use serde::Serialize;

/// a provider route annotated with its emissions and eco score.
///
/// emissions and score are always computed together when the candidate is
/// built and cannot be modified afterward.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RouteCandidate {
    distance_km: f64,
    duration_minutes: f64,
    travel_mode: TravelMode,
    geometry: serde_json::Value,
    co2_kg: f64,
    eco_score: f64,
}

impl RouteCandidate {
    /// scores a provider route given its computed emissions in kg CO2.
    pub fn new(route: ProviderRoute, co2_kg: f64) -> RouteCandidate {
        let score = eco_score(co2_kg, route.distance_km, route.travel_mode);
        RouteCandidate {
            distance_km: route.distance_km,
            duration_minutes: route.duration_minutes,
            travel_mode: route.travel_mode,
            geometry: route.geometry,
            co2_kg,
            eco_score: score,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    pub fn geometry(&self) -> &serde_json::Value {
        &self.geometry
    }

    pub fn co2_kg(&self) -> f64 {
        self.co2_kg
    }

    pub fn eco_score(&self) -> f64 {
        self.eco_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_scores_with_emissions() {
        let route = ProviderRoute::new(
            10.0,
            14.0,
            TravelMode::Driving,
            json!("LINESTRING(0 0, 1 1)"),
        );
        let candidate = RouteCandidate::new(route, 1.2);
        assert_eq!(candidate.co2_kg(), 1.2);
        assert_eq!(candidate.eco_score(), 5.0);
        assert_eq!(candidate.geometry(), &json!("LINESTRING(0 0, 1 1)"));
    }

    #[test]
    fn test_serialized_fields() {
        let route = ProviderRoute::new(1.0, 12.0, TravelMode::Walking, json!(null));
        let candidate = RouteCandidate::new(route, 0.0);
        let value = serde_json::to_value(&candidate).expect("should serialize");
        assert_eq!(value["travel_mode"], json!("walking"));
        assert_eq!(value["eco_score"], json!(10.0));
        assert_eq!(value["co2_kg"], json!(0.0));
    }
}
