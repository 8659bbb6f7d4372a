use crate::{aggregate::AggregationError, geocode::GeocodeError};

#[derive(thiserror::Error, Debug)]
pub enum PlannerError {
    #[error("failure resolving trip location: {source}")]
    Geocode {
        #[from]
        source: GeocodeError,
    },
    #[error("failure aggregating route options: {source}")]
    Aggregation {
        #[from]
        source: AggregationError,
    },
}
