use crate::model::{FuelType, VehicleType};
use serde::{Deserialize, Serialize};

/// grams of CO2 emitted per km for one (vehicle type, fuel type) combination.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmissionFactor {
    pub vehicle_type: VehicleType,
    pub fuel_type: FuelType,
    pub factor_g_per_km: f64,
    pub is_active: bool,
}

impl EmissionFactor {
    pub fn new(
        vehicle_type: VehicleType,
        fuel_type: FuelType,
        factor_g_per_km: f64,
        is_active: bool,
    ) -> EmissionFactor {
        EmissionFactor {
            vehicle_type,
            fuel_type,
            factor_g_per_km,
            is_active,
        }
    }

    pub fn key(&self) -> (VehicleType, FuelType) {
        (self.vehicle_type, self.fuel_type)
    }
}
