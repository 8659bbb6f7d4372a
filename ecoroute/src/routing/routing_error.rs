use ecoroute_core::model::TravelMode;

#[derive(thiserror::Error, Debug, Clone)]
pub enum RoutingError {
    #[error("routing provider unavailable: {0}")]
    Unavailable(String),
    #[error("no {mode} route found")]
    NoRoute { mode: TravelMode },
    #[error("invalid routing provider response: {0}")]
    InvalidResponse(String),
    #[error("failure building routing provider: {0}")]
    BuildError(String),
}
