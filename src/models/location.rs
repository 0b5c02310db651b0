//! Geographic coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude (-90.0 to 90.0).
    pub lat: f64,
    /// Longitude (-180.0 to 180.0).
    pub lon: f64,
}

impl LatLon {
    /// Creates a coordinate pair.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlon_display() {
        let p = LatLon::new(49.26, -123.25);
        assert_eq!(p.to_string(), "49.26, -123.25");
    }

    #[test]
    fn test_latlon_serde_json() {
        let p = LatLon::new(49.2827, -123.1207);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 49.2827, "lon": -123.1207 }));

        let back: LatLon = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }
}
