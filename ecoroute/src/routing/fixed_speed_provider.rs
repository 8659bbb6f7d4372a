use super::{FixedSpeedConfig, RouteOptions, RoutingError, RoutingProvider};
use ecoroute_core::model::{ProviderRoute, TravelMode};
use geo::{line_string, Haversine, Length, LineString, Point};
use std::sync::Arc;
use uom::si::{
    f64::{Time, Velocity},
    length::{kilometer, meter},
    time::minute,
    velocity::kilometer_per_hour,
};
use wkt::ToWkt;

/// an offline routing provider. estimates network distance from the great-circle
/// distance and a per-mode circuity factor, and travel time from a fixed speed.
#[derive(Clone, Debug)]
pub struct FixedSpeedProvider {
    pub config: Arc<FixedSpeedConfig>,
}

impl FixedSpeedProvider {
    pub fn new(config: Arc<FixedSpeedConfig>) -> Result<FixedSpeedProvider, RoutingError> {
        config.validate().map_err(|e| {
            RoutingError::BuildError(format!("invalid fixed speed configuration: {e}"))
        })?;
        Ok(FixedSpeedProvider { config })
    }
}

impl RoutingProvider for FixedSpeedProvider {
    fn get_routes(
        &self,
        origin: &Point<f64>,
        destination: &Point<f64>,
        mode: TravelMode,
        options: &RouteOptions,
    ) -> Result<Vec<ProviderRoute>, RoutingError> {
        let mode_config = self
            .config
            .mode(mode)
            .ok_or(RoutingError::NoRoute { mode })?;

        let line: LineString<f64> = line_string![origin.0, destination.0];
        let great_circle = uom::si::f64::Length::new::<meter>(Haversine.length(&line));
        let geometry = serde_json::Value::String(line.wkt_string());

        let speed_kph = match (mode, options.avoid_highways) {
            (TravelMode::Driving, true) => {
                mode_config.speed_kph * self.config.highway_avoidance_speed_factor
            }
            _ => mode_config.speed_kph,
        };
        let speed = Velocity::new::<kilometer_per_hour>(speed_kph);

        let n_routes = if options.alternatives {
            self.config.alternative_count
        } else {
            1
        };
        let routes = (0..n_routes)
            .map(|idx| {
                let detour = 1.0 + self.config.alternative_detour * idx as f64;
                let distance = great_circle * (mode_config.circuity * detour);
                let travel_time: Time = distance / speed;
                let duration = travel_time.get::<minute>() + mode_config.fixed_delay_minutes;
                ProviderRoute::new(distance.get::<kilometer>(), duration, mode, geometry.clone())
            })
            .collect::<Vec<_>>();
        Ok(routes)
    }
}
