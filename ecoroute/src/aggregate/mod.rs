pub mod aggregate_ops;
mod aggregate_result;
mod aggregation_error;
mod route_aggregator;

pub use aggregate_result::{AggregateResult, UnavailableMode};
pub use aggregation_error::AggregationError;
pub use route_aggregator::RouteAggregator;
