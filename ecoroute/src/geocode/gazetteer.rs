use super::{GeocodeError, Geocoder};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// a named place.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GazetteerEntry {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// geocoder over a fixed list of named places. also accepts decimal
/// coordinates written as "lat,lon".
#[derive(Clone, Debug, Default)]
pub struct Gazetteer {
    places: HashMap<String, Point<f64>>,
}

impl Gazetteer {
    pub fn new(entries: &[GazetteerEntry]) -> Gazetteer {
        let places = entries
            .iter()
            .map(|e| (normalize(&e.name), Point::new(e.lon, e.lat)))
            .collect();
        Gazetteer { places }
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&self, location: &str) -> Result<Point<f64>, GeocodeError> {
        if let Some(point) = parse_lat_lon(location) {
            return Ok(point);
        }
        self.places
            .get(&normalize(location))
            .copied()
            .ok_or_else(|| GeocodeError::LocationNotFound(location.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// reads "lat,lon" in decimal degrees. returns None when the text is not a
/// valid coordinate pair.
fn parse_lat_lon(text: &str) -> Option<Point<f64>> {
    let (lat_str, lon_str) = text.split_once(',')?;
    let lat = lat_str.trim().parse::<f64>().ok()?;
    let lon = lon_str.trim().parse::<f64>().ok()?;
    let valid = lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon);
    valid.then_some(Point::new(lon, lat))
}
