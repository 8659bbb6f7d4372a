use ecoroute_core::model::VehicleProfile;
use serde::{Deserialize, Serialize};

/// a request to plan a trip between two free-text locations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    /// the traveler's vehicle. optional, driving without one uses an average car.
    #[serde(default)]
    pub vehicle: Option<VehicleProfile>,
    /// used to look up stored traveler preferences
    #[serde(default)]
    pub user_id: Option<String>,
}

impl TripRequest {
    pub fn new(origin: &str, destination: &str) -> TripRequest {
        TripRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            vehicle: None,
            user_id: None,
        }
    }

    pub fn with_vehicle(mut self, vehicle: VehicleProfile) -> TripRequest {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn with_user_id(mut self, user_id: &str) -> TripRequest {
        self.user_id = Some(user_id.to_string());
        self
    }
}
