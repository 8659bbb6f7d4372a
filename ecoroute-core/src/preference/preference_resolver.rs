use crate::model::TravelerPreferences;

/// returns the stored preferences verbatim, or the default traveler profile
/// when nothing is stored. never fails.
pub fn resolve(stored: Option<TravelerPreferences>) -> TravelerPreferences {
    match stored {
        Some(preferences) => preferences,
        None => {
            log::debug!("no stored traveler preferences, using defaults");
            TravelerPreferences::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TravelMode;

    #[test]
    fn test_resolve_defaults() {
        let prefs = resolve(None);
        assert_eq!(prefs.max_walking_distance_km, 2.0);
        assert_eq!(prefs.max_cycling_distance_km, 10.0);
        assert_eq!(prefs.default_travel_mode, TravelMode::Driving);
        assert!(!prefs.avoid_tolls);
        assert!(!prefs.avoid_highways);
    }

    #[test]
    fn test_resolve_stored_verbatim() {
        let stored = TravelerPreferences {
            max_walking_distance_km: 5.5,
            max_cycling_distance_km: 30.0,
            avoid_tolls: true,
            avoid_highways: true,
            prefer_eco_routes: false,
            default_travel_mode: TravelMode::Cycling,
        };
        let prefs = resolve(Some(stored.clone()));
        assert_eq!(prefs, stored);
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let stored: TravelerPreferences =
            serde_json::from_value(serde_json::json!({ "max_walking_distance_km": 4.0 }))
                .expect("partial record should decode");
        let prefs = resolve(Some(stored));
        assert_eq!(prefs.max_walking_distance_km, 4.0);
        assert_eq!(prefs.max_cycling_distance_km, 10.0);
    }
}
