use crate::aggregate::UnavailableMode;
use ecoroute_core::model::{EcoSuggestion, RouteCandidate};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct PlanningResult {
    /// route options, best eco score first
    pub routes: Vec<RouteCandidate>,
    /// greener alternatives to the primary driving route, most feasible first
    pub eco_suggestions: Vec<EcoSuggestion>,
    pub total_co2_saved_kg: f64,
    /// travel modes missing from `routes`
    pub unavailable_modes: Vec<UnavailableMode>,
}
