use super::{FixedSpeedConfig, FixedSpeedProvider, RecordedProvider, RoutingError, RoutingProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// selects and configures the routing provider used for planning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum RoutingProviderConfig {
    /// great-circle distance with fixed per-mode speeds
    FixedSpeed(FixedSpeedConfig),
    /// replays provider responses stored in a JSON file
    Recorded { file: String },
}

impl Default for RoutingProviderConfig {
    fn default() -> Self {
        RoutingProviderConfig::FixedSpeed(FixedSpeedConfig::default())
    }
}

impl RoutingProviderConfig {
    pub fn build(&self) -> Result<Arc<dyn RoutingProvider>, RoutingError> {
        match self {
            RoutingProviderConfig::FixedSpeed(config) => {
                let provider = FixedSpeedProvider::new(Arc::new(config.clone()))?;
                Ok(Arc::new(provider))
            }
            RoutingProviderConfig::Recorded { file } => {
                log::info!("replaying routing provider responses from {file}");
                let provider = RecordedProvider::from_file(file)?;
                Ok(Arc::new(provider))
            }
        }
    }
}
