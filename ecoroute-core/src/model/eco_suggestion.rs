use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    Walk,
    Cycle,
    Transit,
    Carpool,
}

impl Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SuggestionType::Walk => "walk",
            SuggestionType::Cycle => "cycle",
            SuggestionType::Transit => "transit",
            SuggestionType::Carpool => "carpool",
        };
        write!(f, "{}", s)
    }
}

/// a "do this instead" alternative to a reference driving route.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EcoSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub distance_km: f64,
    pub duration_minutes: f64,
    /// never negative
    pub co2_savings_kg: f64,
    /// positive when the suggestion is slower than the reference route
    pub time_difference_minutes: f64,
    /// in [1, 10], higher is more recommended
    pub feasibility_score: f64,
}
