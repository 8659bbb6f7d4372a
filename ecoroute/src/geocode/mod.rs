mod gazetteer;
mod geocode_error;
mod geocoder;

pub use gazetteer::{Gazetteer, GazetteerEntry};
pub use geocode_error::GeocodeError;
pub use geocoder::Geocoder;
