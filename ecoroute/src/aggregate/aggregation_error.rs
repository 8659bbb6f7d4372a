use ecoroute_core::emission::EmissionError;

#[derive(thiserror::Error, Debug)]
pub enum AggregationError {
    #[error("routing unavailable: {0}")]
    RoutingUnavailable(String),
    #[error("failure computing route emissions: {source}")]
    Emission {
        #[from]
        source: EmissionError,
    },
}
