use super::{suggestion_ops as ops, AlternativeSource};
use ecoroute_core::model::{
    EcoSuggestion, RouteCandidate, SuggestionType, TravelMode, TravelerPreferences,
};

/// proposes greener ways to make the trip of a reference driving route, ordered
/// by feasibility, most feasible first.
///
/// each suggestion type is gated independently:
///   - walk, when the trip is within the traveler's walking distance
///   - cycle, when the trip is within the traveler's cycling distance
///   - transit, when the transit route emits less than the reference route
///   - carpool, when the trip is longer than [`ops::CARPOOL_MIN_DISTANCE_KM`]
///
/// a failure fetching one alternative only drops that suggestion.
///
/// # Arguments
///
/// * `reference` - the driving route the suggestions are compared against
/// * `preferences` - the traveler's walking and cycling limits
/// * `alternatives` - source of the walking, cycling and transit routes
pub fn generate_suggestions(
    reference: &RouteCandidate,
    preferences: &TravelerPreferences,
    alternatives: &dyn AlternativeSource,
) -> Vec<EcoSuggestion> {
    let mut suggestions: Vec<EcoSuggestion> = vec![];

    if reference.distance_km() <= preferences.max_walking_distance_km {
        if let Some(walk) = fetch(alternatives, TravelMode::Walking) {
            suggestions.push(zero_emission_suggestion(
                SuggestionType::Walk,
                reference,
                &walk,
                ops::WALK_MINUTES_PER_POINT,
            ));
        }
    }

    if reference.distance_km() <= preferences.max_cycling_distance_km {
        if let Some(cycle) = fetch(alternatives, TravelMode::Cycling) {
            suggestions.push(zero_emission_suggestion(
                SuggestionType::Cycle,
                reference,
                &cycle,
                ops::CYCLE_MINUTES_PER_POINT,
            ));
        }
    }

    if let Some(transit) = fetch(alternatives, TravelMode::Transit) {
        let co2_savings_kg = (reference.co2_kg() - transit.co2_kg()).max(0.0);
        if co2_savings_kg > 0.0 {
            suggestions.push(EcoSuggestion {
                suggestion_type: SuggestionType::Transit,
                distance_km: transit.distance_km(),
                duration_minutes: transit.duration_minutes(),
                co2_savings_kg,
                time_difference_minutes: transit.duration_minutes()
                    - reference.duration_minutes(),
                feasibility_score: ops::time_decay_feasibility(
                    transit.duration_minutes(),
                    reference.duration_minutes(),
                    ops::TRANSIT_MINUTES_PER_POINT,
                ),
            });
        } else {
            log::debug!("transit emits no less than driving, not suggested");
        }
    }

    if reference.distance_km() > ops::CARPOOL_MIN_DISTANCE_KM {
        suggestions.push(carpool_suggestion(reference));
    }

    ops::sort_by_feasibility(&mut suggestions);
    suggestions
}

/// fetches the best route for a mode, absorbing failures.
fn fetch(alternatives: &dyn AlternativeSource, mode: TravelMode) -> Option<RouteCandidate> {
    match alternatives.best_route(mode) {
        Ok(Some(route)) => Some(route),
        Ok(None) => {
            log::debug!("no {mode} alternative found, skipping suggestion");
            None
        }
        Err(e) => {
            log::warn!("skipping {mode} suggestion: {e}");
            None
        }
    }
}

/// walking and cycling emit nothing, so they save all of the reference route's emissions.
fn zero_emission_suggestion(
    suggestion_type: SuggestionType,
    reference: &RouteCandidate,
    alternative: &RouteCandidate,
    minutes_per_point: f64,
) -> EcoSuggestion {
    EcoSuggestion {
        suggestion_type,
        distance_km: alternative.distance_km(),
        duration_minutes: alternative.duration_minutes(),
        co2_savings_kg: reference.co2_kg().max(0.0),
        time_difference_minutes: alternative.duration_minutes() - reference.duration_minutes(),
        feasibility_score: ops::time_decay_feasibility(
            alternative.duration_minutes(),
            reference.duration_minutes(),
            minutes_per_point,
        ),
    }
}

/// carpooling is modeled from the reference route rather than fetched.
fn carpool_suggestion(reference: &RouteCandidate) -> EcoSuggestion {
    let time_penalty = reference.duration_minutes() * ops::CARPOOL_TIME_PENALTY;
    EcoSuggestion {
        suggestion_type: SuggestionType::Carpool,
        distance_km: reference.distance_km(),
        duration_minutes: reference.duration_minutes() + time_penalty,
        co2_savings_kg: (reference.co2_kg() * ops::CARPOOL_EMISSION_REDUCTION).max(0.0),
        time_difference_minutes: time_penalty,
        feasibility_score: ops::CARPOOL_FEASIBILITY,
    }
}
