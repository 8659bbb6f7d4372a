use ecoroute_core::model::RouteCandidate;

/// sorts candidates by eco score, best first. the sort is stable so candidates
/// with equal scores keep their provider order.
pub fn sort_by_eco_score(candidates: &mut [RouteCandidate]) {
    candidates.sort_by(|a, b| b.eco_score().total_cmp(&a.eco_score()));
}

/// sum of the CO2 each non-driving candidate saves relative to the first driving
/// candidate. savings are never negative. with no driving candidate there is
/// nothing to compare against and the total is 0.
///
/// expects candidates in provider order.
pub fn total_co2_saved_kg(candidates: &[RouteCandidate]) -> f64 {
    let driving_co2 = match candidates.iter().find(|c| c.travel_mode().is_driving()) {
        Some(driving) => driving.co2_kg(),
        None => return 0.0,
    };
    candidates
        .iter()
        .filter(|c| !c.travel_mode().is_driving())
        .map(|c| (driving_co2 - c.co2_kg()).max(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoroute_core::model::{ProviderRoute, TravelMode};

    fn candidate(mode: TravelMode, distance_km: f64, co2_kg: f64) -> RouteCandidate {
        let route = ProviderRoute::new(distance_km, 10.0, mode, serde_json::Value::Null);
        RouteCandidate::new(route, co2_kg)
    }

    #[test]
    fn test_total_saved() {
        let candidates = vec![
            candidate(TravelMode::Driving, 10.0, 1.2),
            candidate(TravelMode::Driving, 11.0, 1.0),
            candidate(TravelMode::Walking, 9.0, 0.0),
            candidate(TravelMode::Transit, 12.0, 0.6),
        ];
        let total = total_co2_saved_kg(&candidates);
        assert!((total - 1.8).abs() < 1e-12, "{total}");
    }

    #[test]
    fn test_total_saved_never_negative() {
        let candidates = vec![
            candidate(TravelMode::Driving, 1.0, 0.05),
            candidate(TravelMode::Transit, 3.0, 0.15),
        ];
        assert_eq!(total_co2_saved_kg(&candidates), 0.0);
    }

    #[test]
    fn test_total_saved_without_driving() {
        let candidates = vec![
            candidate(TravelMode::Walking, 1.0, 0.0),
            candidate(TravelMode::Transit, 3.0, 0.15),
        ];
        assert_eq!(total_co2_saved_kg(&candidates), 0.0);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut candidates = vec![
            candidate(TravelMode::Driving, 10.0, 1.2),
            candidate(TravelMode::Transit, 10.0, 0.5),
            candidate(TravelMode::Walking, 9.0, 0.0),
            candidate(TravelMode::Cycling, 9.5, 0.0),
        ];
        sort_by_eco_score(&mut candidates);
        let modes = candidates.iter().map(|c| c.travel_mode()).collect::<Vec<_>>();
        assert_eq!(
            modes,
            vec![
                TravelMode::Walking,
                TravelMode::Cycling,
                TravelMode::Driving,
                TravelMode::Transit
            ]
        );
    }
}
