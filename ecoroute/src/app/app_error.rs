use crate::{planner::PlannerError, routing::RoutingError, store::StoreError};
use ecoroute_core::emission::EmissionFactorTableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure planning trip: {source}")]
    PlannerError {
        #[from]
        source: PlannerError,
    },
    #[error("failure building routing provider: {source}")]
    RoutingError {
        #[from]
        source: RoutingError,
    },
    #[error("failure loading emission factors: {source}")]
    EmissionFactorTableError {
        #[from]
        source: EmissionFactorTableError,
    },
    #[error("failure loading traveler preferences: {source}")]
    StoreError {
        #[from]
        source: StoreError,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
