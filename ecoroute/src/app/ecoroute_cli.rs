use super::{run, AppError};
use clap::{Parser, Subcommand};
use ecoroute_core::model::{FuelType, VehicleType};
use serde::{Deserialize, Serialize};

/// command line tool for carbon-aware trip planning
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EcorouteCliArguments {
    /// select the ecoroute operation to run
    #[command(subcommand)]
    pub op: EcorouteOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum EcorouteOperation {
    /// plans a trip, printing the scored routes and eco suggestions as JSON.
    Plan {
        /// trip origin, a configured place name or "lat,lon"
        #[arg(long)]
        origin: String,
        /// trip destination, a configured place name or "lat,lon"
        #[arg(long)]
        destination: String,
        /// the traveler's vehicle type, such as car or motorcycle
        #[arg(long, requires = "fuel_type")]
        vehicle_type: Option<VehicleType>,
        /// the traveler's fuel type, such as gasoline or electric
        #[arg(long, requires = "vehicle_type")]
        fuel_type: Option<FuelType>,
        /// look up stored preferences for this traveler
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long, help = "path to .toml or .json file with planner configuration")]
        configuration_file: Option<String>,
    },
    /// prints the active emission factor table as JSON.
    Factors {
        #[arg(long, help = "path to .toml or .json file with planner configuration")]
        configuration_file: Option<String>,
    },
}

impl EcorouteOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            EcorouteOperation::Plan {
                origin,
                destination,
                vehicle_type,
                fuel_type,
                user_id,
                configuration_file,
            } => run::plan(
                origin,
                destination,
                vehicle_type.zip(*fuel_type),
                user_id.as_deref(),
                configuration_file.as_ref(),
            ),
            EcorouteOperation::Factors { configuration_file } => {
                run::factors(configuration_file.as_ref())
            }
        }
    }
}
