mod app_error;
mod ecoroute_cli;
mod planner_config;
pub mod run;

pub use app_error::AppError;
pub use ecoroute_cli::{EcorouteCliArguments, EcorouteOperation};
pub use planner_config::{PlannerConfig, SuggestionConfig};
