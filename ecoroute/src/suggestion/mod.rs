mod alternative_source;
mod suggestion_error;
mod suggestion_generator;
pub mod suggestion_ops;

pub use alternative_source::{AlternativeSource, ProviderAlternatives, ScoredAlternatives};
pub use suggestion_error::SuggestionError;
pub use suggestion_generator::generate_suggestions;
