use super::StoreError;
use ecoroute_core::{model::TravelerPreferences, preference};
use std::collections::HashMap;

/// read-only access to stored traveler preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, user_id: &str) -> Result<Option<TravelerPreferences>, StoreError>;
}

/// preferences keyed by user id, held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPreferenceStore {
    preferences: HashMap<String, TravelerPreferences>,
}

impl InMemoryPreferenceStore {
    pub fn new(preferences: HashMap<String, TravelerPreferences>) -> InMemoryPreferenceStore {
        InMemoryPreferenceStore { preferences }
    }

    /// reads a JSON object mapping user id to stored preferences.
    pub fn from_file(file: &str) -> Result<InMemoryPreferenceStore, StoreError> {
        let contents = std::fs::read_to_string(file)
            .map_err(|e| StoreError::ReadFailure(file.to_string(), e.to_string()))?;
        let preferences: HashMap<String, TravelerPreferences> = serde_json::from_str(&contents)
            .map_err(|e| StoreError::DecodeFailure(file.to_string(), e.to_string()))?;
        log::debug!("read preferences for {} users from {file}", preferences.len());
        Ok(InMemoryPreferenceStore::new(preferences))
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, user_id: &str) -> Result<Option<TravelerPreferences>, StoreError> {
        Ok(self.preferences.get(user_id).cloned())
    }
}

/// finds the preferences for a traveler. anonymous travelers, travelers with
/// nothing stored, and store read failures all resolve to the default profile.
pub fn resolve_for_user(store: &dyn PreferenceStore, user_id: Option<&str>) -> TravelerPreferences {
    let stored = match user_id {
        None => None,
        Some(id) => match store.get(id) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("using default preferences for user '{id}': {e}");
                None
            }
        },
    };
    preference::resolve(stored)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, user_id: &str) -> Result<Option<TravelerPreferences>, StoreError> {
            Err(StoreError::ReadFailure(
                user_id.to_string(),
                String::from("connection refused"),
            ))
        }
    }

    fn store() -> InMemoryPreferenceStore {
        let prefs = TravelerPreferences {
            max_walking_distance_km: 3.0,
            ..Default::default()
        };
        InMemoryPreferenceStore::new(HashMap::from([(String::from("ana"), prefs)]))
    }

    #[test]
    fn test_stored_user() {
        let prefs = resolve_for_user(&store(), Some("ana"));
        assert_eq!(prefs.max_walking_distance_km, 3.0);
    }

    #[test]
    fn test_unknown_and_anonymous_users() {
        let s = store();
        assert_eq!(resolve_for_user(&s, Some("bo")), TravelerPreferences::default());
        assert_eq!(resolve_for_user(&s, None), TravelerPreferences::default());
    }

    #[test]
    fn test_store_failure_uses_defaults() {
        let prefs = resolve_for_user(&BrokenStore, Some("ana"));
        assert_eq!(prefs, TravelerPreferences::default());
    }
}
