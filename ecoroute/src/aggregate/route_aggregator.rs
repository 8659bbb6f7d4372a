use super::{aggregate_ops, AggregateResult, AggregationError, UnavailableMode};
use crate::routing::{RouteOptions, RoutingError, RoutingProvider};
use ecoroute_core::{
    emission::{emission_ops, EmissionError, EmissionFactorStore},
    model::{ProviderRoute, RouteCandidate, TravelMode, TravelerPreferences, VehicleProfile},
};
use geo::Point;
use itertools::Itertools;
use rayon::prelude::*;

type ModeResponse = (TravelMode, Result<Vec<ProviderRoute>, RoutingError>);

/// collects routes for every travel mode from a routing provider and annotates
/// each with its emissions and eco score.
///
/// driving is requested with alternatives; walking, cycling and transit only
/// keep the provider's best route. a failed or empty mode is left out of the
/// result. only when the provider fails for every mode does aggregation fail;
/// modes without a route are not failures.
pub struct RouteAggregator<'a> {
    provider: &'a dyn RoutingProvider,
    emission_factors: &'a dyn EmissionFactorStore,
    parallelize: bool,
}

impl<'a> RouteAggregator<'a> {
    pub fn new(
        provider: &'a dyn RoutingProvider,
        emission_factors: &'a dyn EmissionFactorStore,
        parallelize: bool,
    ) -> RouteAggregator<'a> {
        RouteAggregator {
            provider,
            emission_factors,
            parallelize,
        }
    }

    /// builds the ranked, emissions-annotated route set for a trip.
    ///
    /// # Arguments
    ///
    /// * `origin` - trip origin
    /// * `destination` - trip destination
    /// * `vehicle` - the traveler's vehicle, if known. selects the emission factor for driving
    /// * `preferences` - traveler preferences forwarded to the routing provider
    ///
    /// # Returns
    ///
    /// routes sorted by eco score with the total CO2 saved by the non-driving modes,
    /// or an error if routing is wholly unavailable or a known vehicle has no emission factor
    pub fn aggregate(
        &self,
        origin: &Point<f64>,
        destination: &Point<f64>,
        vehicle: Option<&VehicleProfile>,
        preferences: &TravelerPreferences,
    ) -> Result<AggregateResult, AggregationError> {
        let responses = self.fetch_all(origin, destination, preferences);
        if responses.iter().all(|(_, r)| is_provider_failure(r)) {
            let reasons = responses
                .iter()
                .filter_map(|(mode, r)| r.as_ref().err().map(|e| format!("{mode}: {e}")))
                .join("; ");
            return Err(AggregationError::RoutingUnavailable(reasons));
        }

        let mut candidates: Vec<RouteCandidate> = vec![];
        let mut unavailable_modes: Vec<UnavailableMode> = vec![];
        for (mode, response) in responses.into_iter() {
            let routes = match response {
                Ok(routes) => routes,
                Err(e) => {
                    log::warn!("omitting {mode} routes: {e}");
                    unavailable_modes.push(UnavailableMode::new(mode, e.to_string()));
                    continue;
                }
            };
            let scored = score_routes(mode, routes, vehicle, self.emission_factors)?;
            if scored.is_empty() {
                log::warn!("omitting {mode} routes: provider returned no usable routes");
                unavailable_modes.push(UnavailableMode::new(
                    mode,
                    String::from("no routes returned"),
                ));
            }
            candidates.extend(scored);
        }

        // both of these depend on provider order, so they happen before sorting
        let reference_route = candidates
            .iter()
            .find(|c| c.travel_mode().is_driving())
            .cloned();
        let total_co2_saved_kg = aggregate_ops::total_co2_saved_kg(&candidates);
        aggregate_ops::sort_by_eco_score(&mut candidates);

        Ok(AggregateResult {
            routes: candidates,
            total_co2_saved_kg,
            reference_route,
            unavailable_modes,
        })
    }

    /// requests each travel mode from the provider, in [`TravelMode::ALL`] order.
    /// the requests are independent; a failure is kept with its mode.
    fn fetch_all(
        &self,
        origin: &Point<f64>,
        destination: &Point<f64>,
        preferences: &TravelerPreferences,
    ) -> Vec<ModeResponse> {
        let fetch = |mode: &TravelMode| -> ModeResponse {
            let options = RouteOptions::new(preferences, mode.is_driving());
            log::debug!(
                "requesting {mode} routes (alternatives={})",
                options.alternatives
            );
            let result = self
                .provider
                .get_routes(origin, destination, *mode, &options)
                .map(|mut routes| {
                    if !options.alternatives {
                        routes.truncate(1);
                    }
                    log::debug!("provider returned {} {mode} routes", routes.len());
                    routes
                });
            (*mode, result)
        };
        if self.parallelize {
            TravelMode::ALL.par_iter().map(fetch).collect()
        } else {
            TravelMode::ALL.iter().map(fetch).collect()
        }
    }
}

/// true when the provider could not answer. a `NoRoute` answer means the
/// provider was reached and had nothing for that mode.
fn is_provider_failure(response: &Result<Vec<ProviderRoute>, RoutingError>) -> bool {
    match response {
        Ok(_) => false,
        Err(RoutingError::NoRoute { .. }) => false,
        Err(_) => true,
    }
}

/// computes emissions for each usable route of a mode. routes the provider
/// labeled with another mode or with invalid distance/duration are dropped.
fn score_routes(
    mode: TravelMode,
    routes: Vec<ProviderRoute>,
    vehicle: Option<&VehicleProfile>,
    emission_factors: &dyn EmissionFactorStore,
) -> Result<Vec<RouteCandidate>, EmissionError> {
    routes
        .into_iter()
        .filter(|route| {
            if route.travel_mode != mode {
                log::warn!(
                    "dropping {} route returned for a {mode} request",
                    route.travel_mode
                );
                return false;
            }
            match route.validate() {
                Ok(_) => true,
                Err(reason) => {
                    log::warn!("dropping {mode} route: {reason}");
                    false
                }
            }
        })
        .map(|route| {
            let co2_kg =
                emission_ops::route_co2_kg(route.distance_km, mode, vehicle, emission_factors)?;
            let candidate = RouteCandidate::new(route, co2_kg);
            log::debug!(
                "{mode} route of {:.2} km emits {:.3} kg CO2, eco score {}",
                candidate.distance_km(),
                candidate.co2_kg(),
                candidate.eco_score()
            );
            Ok(candidate)
        })
        .collect()
}
