use ecoroute_core::model::EcoSuggestion;

pub const MAX_FEASIBILITY: f64 = 10.0;
pub const MIN_FEASIBILITY: f64 = 1.0;

/// minutes of time difference that cost one feasibility point
pub const WALK_MINUTES_PER_POINT: f64 = 10.0;
pub const CYCLE_MINUTES_PER_POINT: f64 = 15.0;
pub const TRANSIT_MINUTES_PER_POINT: f64 = 20.0;

/// carpooling is only suggested for trips longer than this
pub const CARPOOL_MIN_DISTANCE_KM: f64 = 5.0;
/// modeled share of solo driving emissions avoided by carpooling
pub const CARPOOL_EMISSION_REDUCTION: f64 = 0.5;
/// modeled extra time versus solo driving, as a share of the driving time
pub const CARPOOL_TIME_PENALTY: f64 = 0.2;
/// carpooling has no measured route, so it gets a flat feasibility
pub const CARPOOL_FEASIBILITY: f64 = 7.0;

/// feasibility of an alternative that starts at 10 and loses one point for each
/// `minutes_per_point` of time difference against the reference route, floored at 1.
pub fn time_decay_feasibility(
    alternative_minutes: f64,
    reference_minutes: f64,
    minutes_per_point: f64,
) -> f64 {
    let penalty = (alternative_minutes - reference_minutes).abs() / minutes_per_point;
    (MAX_FEASIBILITY - penalty).max(MIN_FEASIBILITY)
}

/// sorts suggestions by feasibility, most feasible first. stable.
pub fn sort_by_feasibility(suggestions: &mut [EcoSuggestion]) {
    suggestions.sort_by(|a, b| b.feasibility_score.total_cmp(&a.feasibility_score));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_decay() {
        assert_eq!(time_decay_feasibility(30.0, 30.0, WALK_MINUTES_PER_POINT), 10.0);
        assert_eq!(time_decay_feasibility(50.0, 20.0, WALK_MINUTES_PER_POINT), 7.0);
        assert_eq!(time_decay_feasibility(20.0, 50.0, CYCLE_MINUTES_PER_POINT), 8.0);
        assert_eq!(time_decay_feasibility(60.0, 20.0, TRANSIT_MINUTES_PER_POINT), 8.0);
    }

    #[test]
    fn test_time_decay_floor() {
        assert_eq!(time_decay_feasibility(500.0, 10.0, WALK_MINUTES_PER_POINT), 1.0);
    }
}
