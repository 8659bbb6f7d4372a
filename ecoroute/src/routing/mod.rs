mod fixed_speed_config;
mod fixed_speed_provider;
mod recorded_provider;
mod routing_error;
mod routing_provider;
mod routing_provider_config;

pub use fixed_speed_config::{FixedSpeedConfig, FixedSpeedModeConfig};
pub use fixed_speed_provider::FixedSpeedProvider;
pub use recorded_provider::{RecordedProvider, RecordedResponse, RecordedRoute};
pub use routing_error::RoutingError;
pub use routing_provider::{RouteOptions, RoutingProvider};
pub use routing_provider_config::RoutingProviderConfig;
