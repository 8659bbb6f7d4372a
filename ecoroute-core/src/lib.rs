pub mod emission;
pub mod model;
pub mod preference;
pub mod score;
