use crate::model::{FuelType, VehicleType};

#[derive(thiserror::Error, Debug)]
pub enum EmissionError {
    #[error("no emission factor for this vehicle/fuel combination: {vehicle_type}/{fuel_type}")]
    NoEmissionFactor {
        vehicle_type: VehicleType,
        fuel_type: FuelType,
    },
    #[error("distance must be a finite, non-negative number of kilometers, found {0}")]
    InvalidDistance(f64),
    #[error("emission factor must be a finite, positive number of grams per km, found {0}")]
    InvalidFactor(f64),
}

#[derive(thiserror::Error, Debug)]
pub enum EmissionFactorTableError {
    #[error("more than one active emission factor for {0}/{1}")]
    DuplicateActiveFactor(VehicleType, FuelType),
    #[error("emission factor for {0}/{1} must be positive, found {2} g/km")]
    NonPositiveFactor(VehicleType, FuelType, f64),
    #[error("emission factor for {0}/{1} has unsupported unit '{2}', expected grams per km")]
    UnsupportedUnit(VehicleType, FuelType, String),
    #[error("failure reading emission factor table {0}: {1}")]
    CsvReadError(String, csv::Error),
}
