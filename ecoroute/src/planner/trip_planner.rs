use super::{PlannerError, PlanningResult, TripRequest};
use crate::{
    aggregate::RouteAggregator,
    geocode::Geocoder,
    routing::RoutingProvider,
    store::{self, PreferenceStore},
    suggestion::{self, ProviderAlternatives, ScoredAlternatives},
};
use ecoroute_core::emission::EmissionFactorStore;
use std::sync::Arc;

/// plans a trip end to end: resolves the locations and traveler preferences,
/// aggregates and scores the route options, and suggests greener alternatives
/// to the primary driving route.
pub struct TripPlanner {
    pub routing_provider: Arc<dyn RoutingProvider>,
    pub geocoder: Arc<dyn Geocoder>,
    pub emission_factors: Arc<dyn EmissionFactorStore>,
    pub preferences: Arc<dyn PreferenceStore>,
    /// request the travel modes concurrently
    pub parallelize: bool,
    /// query the routing provider again for suggestion alternatives instead of
    /// reusing the aggregated routes
    pub refetch_alternatives: bool,
}

impl TripPlanner {
    pub fn new(
        routing_provider: Arc<dyn RoutingProvider>,
        geocoder: Arc<dyn Geocoder>,
        emission_factors: Arc<dyn EmissionFactorStore>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> TripPlanner {
        TripPlanner {
            routing_provider,
            geocoder,
            emission_factors,
            preferences,
            parallelize: true,
            refetch_alternatives: false,
        }
    }

    pub fn plan(&self, request: &TripRequest) -> Result<PlanningResult, PlannerError> {
        let origin = self.geocoder.geocode(&request.origin)?;
        let destination = self.geocoder.geocode(&request.destination)?;
        let preferences =
            store::resolve_for_user(self.preferences.as_ref(), request.user_id.as_deref());

        let aggregator = RouteAggregator::new(
            self.routing_provider.as_ref(),
            self.emission_factors.as_ref(),
            self.parallelize,
        );
        let aggregate = aggregator.aggregate(
            &origin,
            &destination,
            request.vehicle.as_ref(),
            &preferences,
        )?;

        let eco_suggestions = match aggregate.reference_route.as_ref() {
            None => {
                log::debug!("no driving route to compare against, no suggestions");
                vec![]
            }
            Some(reference) if self.refetch_alternatives => {
                let source = ProviderAlternatives::new(
                    self.routing_provider.as_ref(),
                    origin,
                    destination,
                    &preferences,
                );
                suggestion::generate_suggestions(reference, &preferences, &source)
            }
            Some(reference) => {
                let source = ScoredAlternatives::new(&aggregate.routes);
                suggestion::generate_suggestions(reference, &preferences, &source)
            }
        };

        log::info!(
            "planned '{}' to '{}': {} routes, {} suggestions, {:.3} kg CO2 saved",
            request.origin,
            request.destination,
            aggregate.routes.len(),
            eco_suggestions.len(),
            aggregate.total_co2_saved_kg
        );
        Ok(PlanningResult {
            routes: aggregate.routes,
            eco_suggestions,
            total_co2_saved_kg: aggregate.total_co2_saved_kg,
            unavailable_modes: aggregate.unavailable_modes,
        })
    }
}
