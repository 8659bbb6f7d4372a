use super::{RouteOptions, RoutingError, RoutingProvider};
use ecoroute_core::model::{ProviderRoute, TravelMode};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// a previously observed provider route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecordedRoute {
    pub distance_km: f64,
    pub duration_minutes: f64,
    #[serde(default)]
    pub geometry: serde_json::Value,
}

/// the provider's answer for one travel mode: either a failure message or
/// a list of routes in provider order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RecordedResponse {
    Failure { error: String },
    Routes(Vec<RecordedRoute>),
}

/// replays recorded routing provider responses, ignoring origin and destination.
///
/// # Example
///
/// ```json
/// {
///   "driving": [ { "distance_km": 10.0, "duration_minutes": 14.0 } ],
///   "cycling": { "error": "service timeout" }
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordedProvider {
    responses: HashMap<TravelMode, RecordedResponse>,
}

impl RecordedProvider {
    pub fn new(responses: HashMap<TravelMode, RecordedResponse>) -> RecordedProvider {
        RecordedProvider { responses }
    }

    pub fn from_json_str(json: &str) -> Result<RecordedProvider, RoutingError> {
        let responses: HashMap<TravelMode, RecordedResponse> = serde_json::from_str(json)
            .map_err(|e| {
                RoutingError::BuildError(format!("failure decoding recorded responses: {e}"))
            })?;
        Ok(RecordedProvider::new(responses))
    }

    pub fn from_file(file: &str) -> Result<RecordedProvider, RoutingError> {
        let contents = std::fs::read_to_string(file)
            .map_err(|e| RoutingError::BuildError(format!("unable to load file {file}: {e}")))?;
        RecordedProvider::from_json_str(&contents)
    }
}

impl RoutingProvider for RecordedProvider {
    fn get_routes(
        &self,
        _origin: &Point<f64>,
        _destination: &Point<f64>,
        mode: TravelMode,
        options: &RouteOptions,
    ) -> Result<Vec<ProviderRoute>, RoutingError> {
        match self.responses.get(&mode) {
            None => Err(RoutingError::NoRoute { mode }),
            Some(RecordedResponse::Failure { error }) => {
                Err(RoutingError::Unavailable(error.clone()))
            }
            Some(RecordedResponse::Routes(routes)) => {
                let n_routes = if options.alternatives { routes.len() } else { 1 };
                let result = routes
                    .iter()
                    .take(n_routes)
                    .map(|r| {
                        ProviderRoute::new(
                            r.distance_km,
                            r.duration_minutes,
                            mode,
                            r.geometry.clone(),
                        )
                    })
                    .collect();
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::point;

    const RECORDED: &str = r#"{
        "driving": [
            { "distance_km": 10.0, "duration_minutes": 14.0, "geometry": ["head north", "turn left"] },
            { "distance_km": 11.5, "duration_minutes": 13.0 }
        ],
        "walking": [],
        "cycling": { "error": "service timeout" }
    }"#;

    #[test]
    fn test_replay() {
        let provider = RecordedProvider::from_json_str(RECORDED).expect("should decode");
        let o = point! { x: 0.0, y: 0.0 };
        let all = provider
            .get_routes(
                &o,
                &o,
                TravelMode::Driving,
                &RouteOptions {
                    alternatives: true,
                    ..Default::default()
                },
            )
            .expect("should replay");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].geometry, serde_json::json!(["head north", "turn left"]));
        let best = provider
            .get_routes(&o, &o, TravelMode::Driving, &RouteOptions::default())
            .expect("should replay");
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].distance_km, 10.0);
    }

    #[test]
    fn test_replay_failures() {
        let provider = RecordedProvider::from_json_str(RECORDED).expect("should decode");
        let o = point! { x: 0.0, y: 0.0 };
        let options = RouteOptions::default();
        let walking = provider
            .get_routes(&o, &o, TravelMode::Walking, &options)
            .expect("empty response is not an error");
        assert!(walking.is_empty());
        let cycling = provider.get_routes(&o, &o, TravelMode::Cycling, &options);
        assert!(matches!(cycling, Err(RoutingError::Unavailable(_))));
        let transit = provider.get_routes(&o, &o, TravelMode::Transit, &options);
        assert!(matches!(transit, Err(RoutingError::NoRoute { .. })));
    }
}
