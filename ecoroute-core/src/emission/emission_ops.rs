use super::{
    EmissionError, EmissionFactor, EmissionFactorStore, EmissionMode, DEFAULT_MODE_COEFFICIENTS,
};
use crate::model::{TravelMode, VehicleProfile};

const GRAMS_PER_KG: f64 = 1000.0;

/// CO2 mass in kg for a distance driven by a vehicle with the given emission factor.
pub fn vehicle_co2_kg(distance_km: f64, factor: &EmissionFactor) -> Result<f64, EmissionError> {
    validate_distance(distance_km)?;
    let g_per_km = factor.factor_g_per_km;
    if !g_per_km.is_finite() || g_per_km <= 0.0 {
        return Err(EmissionError::InvalidFactor(g_per_km));
    }
    Ok(distance_km * g_per_km / GRAMS_PER_KG)
}

/// CO2 mass in kg for a known vehicle. the emission factor must be an exact, active
/// match for the vehicle's type and fuel; there is no fallback to a default factor.
pub fn driving_co2_kg(
    distance_km: f64,
    vehicle: &VehicleProfile,
    store: &dyn EmissionFactorStore,
) -> Result<f64, EmissionError> {
    validate_distance(distance_km)?;
    let no_factor = || EmissionError::NoEmissionFactor {
        vehicle_type: vehicle.vehicle_type,
        fuel_type: vehicle.fuel_type,
    };
    let factor = store
        .lookup(vehicle.vehicle_type, vehicle.fuel_type)?
        .ok_or_else(no_factor)?;
    if !factor.is_active {
        return Err(no_factor());
    }
    vehicle_co2_kg(distance_km, &factor)
}

/// CO2 mass in kg using the engine's fixed per-mode coefficient.
pub fn fixed_co2_kg(distance_km: f64, mode: EmissionMode) -> Result<f64, EmissionError> {
    validate_distance(distance_km)?;
    Ok(DEFAULT_MODE_COEFFICIENTS.kg_per_km(mode) * distance_km)
}

/// CO2 mass in kg for a route. driving with a known vehicle uses the vehicle's emission
/// factor, everything else (including driving without a vehicle) uses the fixed coefficients.
pub fn route_co2_kg(
    distance_km: f64,
    travel_mode: TravelMode,
    vehicle: Option<&VehicleProfile>,
    store: &dyn EmissionFactorStore,
) -> Result<f64, EmissionError> {
    match (travel_mode, vehicle) {
        (TravelMode::Driving, Some(v)) => driving_co2_kg(distance_km, v, store),
        _ => fixed_co2_kg(distance_km, EmissionMode::from(travel_mode)),
    }
}

fn validate_distance(distance_km: f64) -> Result<(), EmissionError> {
    if distance_km.is_finite() && distance_km >= 0.0 {
        Ok(())
    } else {
        Err(EmissionError::InvalidDistance(distance_km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emission::EmissionFactorTable;
    use crate::model::{FuelType, VehicleType};

    fn test_table() -> EmissionFactorTable {
        EmissionFactorTable::new(vec![
            EmissionFactor::new(VehicleType::Car, FuelType::Gasoline, 120.0, true),
            EmissionFactor::new(VehicleType::Car, FuelType::Diesel, 171.0, false),
            EmissionFactor::new(VehicleType::Van, FuelType::Electric, 80.0, true),
        ])
        .expect("test invariant failed: table should be valid")
    }

    #[test]
    fn test_driving_car_gasoline() {
        let table = test_table();
        let vehicle = VehicleProfile::new(VehicleType::Car, FuelType::Gasoline);
        let co2 = driving_co2_kg(10.0, &vehicle, &table).expect("should find factor");
        assert_eq!(co2, 1.2);
    }

    #[test]
    fn test_driving_is_distance_times_factor() {
        let table = test_table();
        let vehicle = VehicleProfile::new(VehicleType::Van, FuelType::Electric);
        for distance in [0.0, 0.5, 3.25, 17.0, 250.0, 1234.5] {
            let co2 = driving_co2_kg(distance, &vehicle, &table).expect("should find factor");
            assert_eq!(co2, distance * 80.0 / 1000.0, "distance {distance}");
        }
    }

    #[test]
    fn test_driving_missing_factor_fails() {
        let table = test_table();
        let vehicle = VehicleProfile::new(VehicleType::Truck, FuelType::Cng);
        let result = driving_co2_kg(10.0, &vehicle, &table);
        match result {
            Err(EmissionError::NoEmissionFactor {
                vehicle_type,
                fuel_type,
            }) => {
                assert_eq!(vehicle_type, VehicleType::Truck);
                assert_eq!(fuel_type, FuelType::Cng);
            }
            other => panic!("expected NoEmissionFactor, found {:?}", other),
        }
    }

    #[test]
    fn test_driving_inactive_factor_fails() {
        let table = test_table();
        let vehicle = VehicleProfile::new(VehicleType::Car, FuelType::Diesel);
        let result = driving_co2_kg(10.0, &vehicle, &table);
        assert!(matches!(
            result,
            Err(EmissionError::NoEmissionFactor { .. })
        ));
    }

    #[test]
    fn test_fixed_coefficients() {
        for distance in [0.0, 1.0, 7.5, 42.0] {
            let walk = fixed_co2_kg(distance, EmissionMode::Walking).expect("valid distance");
            let cycle = fixed_co2_kg(distance, EmissionMode::Cycling).expect("valid distance");
            let transit = fixed_co2_kg(distance, EmissionMode::Transit).expect("valid distance");
            let carpool = fixed_co2_kg(distance, EmissionMode::Carpool).expect("valid distance");
            assert_eq!(walk, 0.0);
            assert_eq!(cycle, 0.0);
            assert_eq!(transit, 0.05 * distance);
            assert_eq!(carpool, 0.06 * distance);
        }
    }

    #[test]
    fn test_route_driving_without_vehicle_uses_baseline() {
        let table = test_table();
        let co2 = route_co2_kg(10.0, TravelMode::Driving, None, &table).expect("should not fail");
        assert_eq!(co2, 0.12 * 10.0);
    }

    #[test]
    fn test_route_non_driving_ignores_vehicle() {
        let table = test_table();
        let vehicle = VehicleProfile::new(VehicleType::Truck, FuelType::Cng);
        let co2 = route_co2_kg(10.0, TravelMode::Transit, Some(&vehicle), &table)
            .expect("transit should not need an emission factor");
        assert_eq!(co2, 0.05 * 10.0);
    }

    #[test]
    fn test_vehicle_invalid_factor() {
        let factor = EmissionFactor::new(VehicleType::Car, FuelType::Electric, 0.0, true);
        let result = vehicle_co2_kg(10.0, &factor);
        assert!(matches!(result, Err(EmissionError::InvalidFactor(_))));
    }

    #[test]
    fn test_invalid_distance() {
        let result = fixed_co2_kg(-1.0, EmissionMode::Transit);
        assert!(matches!(result, Err(EmissionError::InvalidDistance(_))));
        let result = fixed_co2_kg(f64::NAN, EmissionMode::Walking);
        assert!(matches!(result, Err(EmissionError::InvalidDistance(_))));
    }
}
