use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric city identifier, stable across the fixed catalog
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub u32);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Latitude/longitude in degrees
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A selectable city.
///
/// Cities only act as the trigger for playback. None of their fields feed
/// into the generated tones.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
}

impl City {
    pub fn new(id: u32, name: &str, country: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: CityId(id),
            name: name.to_string(),
            country: country.to_string(),
            coordinates: Coordinates { lat, lng },
        }
    }
}

/// The ten capital cities shipped with the demo
pub fn builtin_cities() -> Vec<City> {
    vec![
        City::new(1, "Tokyo", "Japan", 35.6762, 139.6503),
        City::new(2, "London", "UK", 51.5074, -0.1278),
        City::new(3, "New York", "USA", 40.7128, -74.0060),
        City::new(4, "Paris", "France", 48.8566, 2.3522),
        City::new(5, "Sydney", "Australia", -33.8688, 151.2093),
        City::new(6, "Berlin", "Germany", 52.5200, 13.4050),
        City::new(7, "Mumbai", "India", 19.0760, 72.8777),
        City::new(8, "Rio", "Brazil", -22.9068, -43.1729),
        City::new(9, "Cairo", "Egypt", 30.0444, 31.2357),
        City::new(10, "Moscow", "Russia", 55.7558, 37.6173),
    ]
}
