use crate::routing::RoutingError;
use ecoroute_core::emission::EmissionError;

#[derive(thiserror::Error, Debug)]
pub enum SuggestionError {
    #[error("failure fetching alternative route: {source}")]
    Routing {
        #[from]
        source: RoutingError,
    },
    #[error("failure computing alternative route emissions: {source}")]
    Emission {
        #[from]
        source: EmissionError,
    },
}
