use super::RoutingError;
use ecoroute_core::model::{ProviderRoute, TravelMode, TravelerPreferences};
use geo::Point;
use serde::{Deserialize, Serialize};

/// request options forwarded to a routing provider.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteOptions {
    /// if true, the provider may return more than one candidate
    pub alternatives: bool,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
}

impl RouteOptions {
    pub fn new(preferences: &TravelerPreferences, alternatives: bool) -> RouteOptions {
        RouteOptions {
            alternatives,
            avoid_tolls: preferences.avoid_tolls,
            avoid_highways: preferences.avoid_highways,
        }
    }
}

/// external routing service. given an origin, destination and travel mode,
/// returns zero or more candidate routes, ordered by the provider's preference.
///
/// points are (x=longitude, y=latitude).
pub trait RoutingProvider: Send + Sync {
    fn get_routes(
        &self,
        origin: &Point<f64>,
        destination: &Point<f64>,
        mode: TravelMode,
        options: &RouteOptions,
    ) -> Result<Vec<ProviderRoute>, RoutingError>;
}
