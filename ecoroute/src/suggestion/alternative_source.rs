use super::SuggestionError;
use crate::routing::{RouteOptions, RoutingError, RoutingProvider};
use ecoroute_core::{
    emission::{emission_ops, EmissionMode},
    model::{RouteCandidate, TravelMode, TravelerPreferences},
};
use geo::Point;

/// supplies the best scored route of a travel mode for a trip, used as the
/// basis of an eco suggestion.
pub trait AlternativeSource {
    fn best_route(&self, mode: TravelMode) -> Result<Option<RouteCandidate>, SuggestionError>;
}

/// fetches alternatives from a routing provider, one request per mode.
pub struct ProviderAlternatives<'a> {
    provider: &'a dyn RoutingProvider,
    origin: Point<f64>,
    destination: Point<f64>,
    options: RouteOptions,
}

impl<'a> ProviderAlternatives<'a> {
    pub fn new(
        provider: &'a dyn RoutingProvider,
        origin: Point<f64>,
        destination: Point<f64>,
        preferences: &TravelerPreferences,
    ) -> ProviderAlternatives<'a> {
        ProviderAlternatives {
            provider,
            origin,
            destination,
            options: RouteOptions::new(preferences, false),
        }
    }
}

impl AlternativeSource for ProviderAlternatives<'_> {
    fn best_route(&self, mode: TravelMode) -> Result<Option<RouteCandidate>, SuggestionError> {
        let routes =
            self.provider
                .get_routes(&self.origin, &self.destination, mode, &self.options)?;
        let route = match routes.into_iter().next() {
            Some(route) => route,
            None => return Ok(None),
        };
        if route.travel_mode != mode {
            log::warn!(
                "dropping {} route returned for a {mode} request",
                route.travel_mode
            );
            return Ok(None);
        }
        route.validate().map_err(RoutingError::InvalidResponse)?;
        let co2_kg = emission_ops::fixed_co2_kg(route.distance_km, EmissionMode::from(mode))?;
        Ok(Some(RouteCandidate::new(route, co2_kg)))
    }
}

/// reuses candidates that were already fetched and scored.
pub struct ScoredAlternatives<'a> {
    candidates: &'a [RouteCandidate],
}

impl<'a> ScoredAlternatives<'a> {
    pub fn new(candidates: &'a [RouteCandidate]) -> ScoredAlternatives<'a> {
        ScoredAlternatives { candidates }
    }
}

impl AlternativeSource for ScoredAlternatives<'_> {
    fn best_route(&self, mode: TravelMode) -> Result<Option<RouteCandidate>, SuggestionError> {
        let found = self
            .candidates
            .iter()
            .find(|c| c.travel_mode() == mode)
            .cloned();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoroute_core::model::ProviderRoute;
    use geo::point;

    /// answers every request with the same route, whatever mode was asked for.
    struct FixedRouteProvider {
        route: ProviderRoute,
    }

    impl RoutingProvider for FixedRouteProvider {
        fn get_routes(
            &self,
            _origin: &Point<f64>,
            _destination: &Point<f64>,
            _mode: TravelMode,
            _options: &RouteOptions,
        ) -> Result<Vec<ProviderRoute>, RoutingError> {
            Ok(vec![self.route.clone()])
        }
    }

    fn alternatives(provider: &FixedRouteProvider) -> ProviderAlternatives<'_> {
        ProviderAlternatives::new(
            provider,
            point! { x: -105.0, y: 39.7 },
            point! { x: -104.9, y: 39.75 },
            &TravelerPreferences::default(),
        )
    }

    #[test]
    fn test_provider_route_scored_with_fixed_coefficient() {
        let provider = FixedRouteProvider {
            route: ProviderRoute::new(10.0, 30.0, TravelMode::Transit, serde_json::Value::Null),
        };
        let transit = alternatives(&provider)
            .best_route(TravelMode::Transit)
            .expect("should fetch")
            .expect("should find transit route");
        assert_eq!(transit.co2_kg(), 0.05 * 10.0);
        assert_eq!(transit.travel_mode(), TravelMode::Transit);
    }

    #[test]
    fn test_provider_route_with_other_mode_dropped() {
        let provider = FixedRouteProvider {
            route: ProviderRoute::new(10.0, 15.0, TravelMode::Driving, serde_json::Value::Null),
        };
        let walk = alternatives(&provider)
            .best_route(TravelMode::Walking)
            .expect("a mislabeled route is not an error");
        assert!(walk.is_none());
    }

    #[test]
    fn test_provider_route_invalid_is_error() {
        let provider = FixedRouteProvider {
            route: ProviderRoute::new(-1.0, 15.0, TravelMode::Cycling, serde_json::Value::Null),
        };
        let result = alternatives(&provider).best_route(TravelMode::Cycling);
        assert!(matches!(
            result,
            Err(SuggestionError::Routing {
                source: RoutingError::InvalidResponse(_)
            })
        ));
    }
}
