mod preference_store;
mod store_error;

pub use preference_store::{resolve_for_user, InMemoryPreferenceStore, PreferenceStore};
pub use store_error::StoreError;
