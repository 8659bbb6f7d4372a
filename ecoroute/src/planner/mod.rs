mod planner_error;
mod planning_result;
mod trip_planner;
mod trip_request;

pub use planner_error::PlannerError;
pub use planning_result::PlanningResult;
pub use trip_planner::TripPlanner;
pub use trip_request::TripRequest;
