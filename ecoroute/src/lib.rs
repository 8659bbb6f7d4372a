pub mod aggregate;
pub mod app;
pub mod geocode;
pub mod planner;
pub mod routing;
pub mod store;
pub mod suggestion;
