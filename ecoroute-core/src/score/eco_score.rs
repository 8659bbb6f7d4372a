use crate::emission::{EmissionMode, DEFAULT_MODE_COEFFICIENTS};
use crate::model::TravelMode;

pub const MIN_ECO_SCORE: f64 = 1.0;
pub const MAX_ECO_SCORE: f64 = 10.0;
/// score assigned when actual emissions equal the expected emissions for the mode
const PARITY_SCORE: f64 = 5.0;

/// rates the emissions of a route relative to a generic expectation for its mode
/// over the same distance, in [1.0, 10.0] rounded to one decimal place.
///
/// zero-emission routes always score 10.0. a zero-length route with nonzero
/// emissions scores 1.0.
///
/// # Arguments
///
/// * `co2_kg` - emissions of the route
/// * `distance_km` - length of the route
/// * `mode` - travel mode, selects the expected kg CO2 per km
pub fn eco_score(co2_kg: f64, distance_km: f64, mode: TravelMode) -> f64 {
    if co2_kg == 0.0 {
        return MAX_ECO_SCORE;
    }
    let expected = DEFAULT_MODE_COEFFICIENTS.kg_per_km(EmissionMode::from(mode)) * distance_km;
    let ratio = expected / co2_kg;
    if ratio.is_nan() {
        return MIN_ECO_SCORE;
    }
    // clamp first: tiny emissions may produce an unbounded ratio
    let score = (ratio * PARITY_SCORE).clamp(MIN_ECO_SCORE, MAX_ECO_SCORE);
    (score * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driving_at_baseline() {
        let score = eco_score(1.2, 10.0, TravelMode::Driving);
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_zero_emissions_always_max() {
        for mode in TravelMode::ALL {
            for distance in [0.0, 0.1, 3.0, 800.0] {
                assert_eq!(eco_score(0.0, distance, mode), 10.0, "{mode} {distance}");
            }
        }
    }

    #[test]
    fn test_bounded() {
        let emissions = [1e-12, 0.001, 0.05, 0.6, 1.2, 2.4, 50.0, 1e9];
        let distances = [0.0, 0.2, 1.0, 10.0, 120.0];
        for mode in TravelMode::ALL {
            for co2 in emissions {
                for distance in distances {
                    let score = eco_score(co2, distance, mode);
                    assert!(
                        (MIN_ECO_SCORE..=MAX_ECO_SCORE).contains(&score),
                        "score {score} out of range for {mode}, co2={co2}, distance={distance}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_distance_with_emissions_is_min() {
        assert_eq!(eco_score(0.3, 0.0, TravelMode::Driving), 1.0);
    }

    #[test]
    fn test_better_than_expected() {
        // half the expected emissions doubles the parity score
        assert_eq!(eco_score(0.6, 10.0, TravelMode::Driving), 10.0);
        // an electric car at 53 g/km over 10km
        assert_eq!(eco_score(0.53, 10.0, TravelMode::Driving), 10.0);
        // a hybrid at 109 g/km over 10km: 1.2 / 1.09 * 5 = 5.50...
        assert_eq!(eco_score(1.09, 10.0, TravelMode::Driving), 5.5);
    }

    #[test]
    fn test_worse_than_expected() {
        // a truck at 900 g/km over 10km: 1.2 / 9.0 * 5 = 0.67, clamped
        assert_eq!(eco_score(9.0, 10.0, TravelMode::Driving), 1.0);
        // 192 g/km: 1.2 / 1.92 * 5 = 3.125
        assert_eq!(eco_score(1.92, 10.0, TravelMode::Driving), 3.1);
    }

    #[test]
    fn test_transit_at_baseline() {
        assert_eq!(eco_score(0.05 * 8.0, 8.0, TravelMode::Transit), 5.0);
    }

    #[test]
    fn test_walking_with_emissions_is_min() {
        assert_eq!(eco_score(0.1, 2.0, TravelMode::Walking), 1.0);
    }
}
