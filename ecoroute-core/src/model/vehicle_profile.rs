use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
    Bus,
    Van,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
    Lpg,
    Cng,
}

/// the vehicle a traveler drives. only used to select an emission factor
/// for driving candidates.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VehicleProfile {
    pub vehicle_type: VehicleType,
    pub fuel_type: FuelType,
}

impl VehicleProfile {
    pub fn new(vehicle_type: VehicleType, fuel_type: FuelType) -> VehicleProfile {
        VehicleProfile {
            vehicle_type,
            fuel_type,
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VehicleType::Car => "car",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Truck => "truck",
            VehicleType::Bus => "bus",
            VehicleType::Van => "van",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(VehicleType::Car),
            "motorcycle" => Ok(VehicleType::Motorcycle),
            "truck" => Ok(VehicleType::Truck),
            "bus" => Ok(VehicleType::Bus),
            "van" => Ok(VehicleType::Van),
            other => Err(format!("unknown vehicle type '{other}'")),
        }
    }
}

impl Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
            FuelType::Lpg => "lpg",
            FuelType::Cng => "cng",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gasoline" | "petrol" => Ok(FuelType::Gasoline),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            "lpg" => Ok(FuelType::Lpg),
            "cng" => Ok(FuelType::Cng),
            other => Err(format!("unknown fuel type '{other}'")),
        }
    }
}
