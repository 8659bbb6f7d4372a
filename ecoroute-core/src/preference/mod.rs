mod preference_resolver;

pub use preference_resolver::resolve;
