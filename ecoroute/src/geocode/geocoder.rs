use super::GeocodeError;
use geo::Point;

/// resolves free-text locations to coordinates (x=longitude, y=latitude).
pub trait Geocoder: Send + Sync {
    fn geocode(&self, location: &str) -> Result<Point<f64>, GeocodeError>;
}
