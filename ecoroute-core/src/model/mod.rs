mod eco_suggestion;
mod provider_route;
mod route_candidate;
mod travel_mode;
mod traveler_preferences;
mod vehicle_profile;

pub use eco_suggestion::{EcoSuggestion, SuggestionType};
pub use provider_route::ProviderRoute;
pub use route_candidate::RouteCandidate;
pub use travel_mode::TravelMode;
pub use traveler_preferences::TravelerPreferences;
pub use vehicle_profile::{FuelType, VehicleProfile, VehicleType};
