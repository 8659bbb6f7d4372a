use super::AppError;
use crate::{
    geocode::{Gazetteer, GazetteerEntry},
    planner::TripPlanner,
    routing::RoutingProviderConfig,
    store::InMemoryPreferenceStore,
};
use ecoroute_core::emission::EmissionFactorTable;
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::Arc};

/// defines the collaborators and behaviors of a trip planner.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    pub routing: RoutingProviderConfig,
    /// CSV emission factor table. the bundled table is used when missing.
    pub emission_factors_file: Option<String>,
    /// JSON object of user id to stored traveler preferences
    pub preferences_file: Option<String>,
    pub gazetteer: Vec<GazetteerEntry>,
    pub parallelize: bool,
    pub suggestions: SuggestionConfig,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(default)]
pub struct SuggestionConfig {
    /// re-query the routing provider for suggestion alternatives
    pub refetch_alternatives: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            routing: RoutingProviderConfig::default(),
            emission_factors_file: None,
            preferences_file: None,
            gazetteer: vec![],
            parallelize: true,
            suggestions: SuggestionConfig::default(),
        }
    }
}

impl PlannerConfig {
    pub fn emission_factor_table(&self) -> Result<EmissionFactorTable, AppError> {
        let table = match &self.emission_factors_file {
            Some(f) => {
                log::info!("reading emission factors from {f}");
                EmissionFactorTable::from_csv_file(Path::new(f))?
            }
            None => EmissionFactorTable::bundled()?,
        };
        Ok(table)
    }

    pub fn preference_store(&self) -> Result<InMemoryPreferenceStore, AppError> {
        match &self.preferences_file {
            Some(f) => {
                log::info!("reading traveler preferences from {f}");
                Ok(InMemoryPreferenceStore::from_file(f)?)
            }
            None => Ok(InMemoryPreferenceStore::default()),
        }
    }
}

impl TryFrom<&String> for PlannerConfig {
    type Error = AppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(AppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

impl TryFrom<&PlannerConfig> for TripPlanner {
    type Error = AppError;

    fn try_from(config: &PlannerConfig) -> Result<Self, Self::Error> {
        let routing_provider = config.routing.build()?;
        let emission_factors = config.emission_factor_table()?;
        let preferences = config.preference_store()?;
        let geocoder = Gazetteer::new(&config.gazetteer);
        let mut planner = TripPlanner::new(
            routing_provider,
            Arc::new(geocoder),
            Arc::new(emission_factors),
            Arc::new(preferences),
        );
        planner.parallelize = config.parallelize;
        planner.refetch_alternatives = config.suggestions.refetch_alternatives;
        Ok(planner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::TripRequest;
    use crate::routing::FixedSpeedConfig;
    use ecoroute_core::model::TravelMode;

    #[test]
    fn test_default_is_complete() {
        let config = PlannerConfig::default();
        let planner = TripPlanner::try_from(&config).expect("default config should build");
        assert!(planner.parallelize);
        assert!(!planner.refetch_alternatives);
        let result = planner
            .plan(&TripRequest::new("39.7527,-105.0002", "39.7392,-104.9903"))
            .expect("should plan with the fixed speed provider");
        assert!(result.unavailable_modes.is_empty());
        assert!(result
            .routes
            .iter()
            .any(|r| r.travel_mode() == TravelMode::Driving));
    }

    #[test]
    fn test_decode_toml() {
        let config: PlannerConfig = toml::from_str(
            r#"
            parallelize = false
            preferences_file = "preferences.json"

            [routing]
            type = "recorded"
            file = "responses.json"

            [suggestions]
            refetch_alternatives = true

            [[gazetteer]]
            name = "union station"
            lat = 39.7527
            lon = -105.0002
            "#,
        )
        .expect("should decode");
        assert!(!config.parallelize);
        assert!(config.suggestions.refetch_alternatives);
        assert_eq!(
            config.routing,
            RoutingProviderConfig::Recorded {
                file: String::from("responses.json")
            }
        );
        assert_eq!(config.preferences_file.as_deref(), Some("preferences.json"));
        assert_eq!(config.emission_factors_file, None);
        assert_eq!(config.gazetteer.len(), 1);
    }

    #[test]
    fn test_decode_json() {
        let json = serde_json::json!({
            "routing": {
                "type": "fixed_speed",
                "alternative_count": 2,
                "transit": null
            }
        });
        let config: PlannerConfig = serde_json::from_value(json).expect("should decode");
        let expected = FixedSpeedConfig {
            alternative_count: 2,
            transit: None,
            ..Default::default()
        };
        assert_eq!(config.routing, RoutingProviderConfig::FixedSpeed(expected));
        assert!(config.parallelize);
        assert!(config.gazetteer.is_empty());
    }

    #[test]
    fn test_unsupported_file_type() {
        let result = PlannerConfig::try_from(&String::from("planner.yaml"));
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }
}
