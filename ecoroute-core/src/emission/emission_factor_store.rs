use super::{EmissionError, EmissionFactor};
use crate::model::{FuelType, VehicleType};

/// read-only access to the emission factor table of the persistence layer.
pub trait EmissionFactorStore: Send + Sync {
    /// finds the active emission factor for an exact (vehicle type, fuel type) match.
    /// inactive factors are never returned.
    ///
    /// # Returns
    ///
    /// the factor if one is active, None if not found, or an error if the store
    /// could not be read
    fn lookup(
        &self,
        vehicle_type: VehicleType,
        fuel_type: FuelType,
    ) -> Result<Option<EmissionFactor>, EmissionError>;
}
