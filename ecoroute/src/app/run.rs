use super::{AppError, PlannerConfig};
use crate::planner::{TripPlanner, TripRequest};
use ecoroute_core::model::{FuelType, VehicleProfile, VehicleType};

/// plans a single trip and writes the result to stdout.
pub fn plan(
    origin: &str,
    destination: &str,
    vehicle: Option<(VehicleType, FuelType)>,
    user_id: Option<&str>,
    configuration_file: Option<&String>,
) -> Result<(), AppError> {
    let config = read_config(configuration_file)?;
    let planner = TripPlanner::try_from(&config)?;
    let mut request = TripRequest::new(origin, destination);
    if let Some((vehicle_type, fuel_type)) = vehicle {
        request = request.with_vehicle(VehicleProfile::new(vehicle_type, fuel_type));
    }
    if let Some(id) = user_id {
        request = request.with_user_id(id);
    }
    let result = planner.plan(&request)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// writes the active emission factors to stdout.
pub fn factors(configuration_file: Option<&String>) -> Result<(), AppError> {
    let config = read_config(configuration_file)?;
    let table = config.emission_factor_table()?;
    println!("{}", serde_json::to_string_pretty(&table.active_factors())?);
    Ok(())
}

fn read_config(configuration_file: Option<&String>) -> Result<PlannerConfig, AppError> {
    match configuration_file {
        None => Ok(PlannerConfig::default()),
        Some(f) => {
            log::info!("reading planner configuration from {f}");
            PlannerConfig::try_from(f)
        }
    }
}
