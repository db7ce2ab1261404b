//! Geographic point used for city centres, activities and attractions

use haversine::{Location as HaversineLocation, Units, distance};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as "lat,lng" for map queries
    #[must_use]
    pub fn format_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Round coordinates for cache key generation
    #[must_use]
    pub fn rounded_coordinates(&self, precision: u32) -> (f64, f64) {
        let multiplier = 10_f64.powi(i32::try_from(precision).unwrap_or(4));
        let lat = (self.latitude * multiplier).round() / multiplier;
        let lon = (self.longitude * multiplier).round() / multiplier;
        (lat, lon)
    }

    /// Great-circle distance in kilometres
    #[must_use]
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let from = HaversineLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        };
        let to = HaversineLocation {
            latitude: other.latitude,
            longitude: other.longitude,
        };
        distance(from, to, Units::Kilometers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_coordinates() {
        let point = GeoPoint::new(35.676_234, 139.650_345);
        let (lat, lon) = point.rounded_coordinates(2);
        assert_eq!(lat, 35.68);
        assert_eq!(lon, 139.65);
    }

    #[test]
    fn test_format_query() {
        let point = GeoPoint::new(35.6426, 139.7836);
        assert_eq!(point.format_query(), "35.6426,139.7836");
    }

    #[test]
    fn test_distance_tokyo_osaka() {
        let tokyo = GeoPoint::new(35.6762, 139.6503);
        let osaka = GeoPoint::new(34.6937, 135.5023);
        let km = tokyo.distance_km(&osaka);
        assert!(km > 380.0 && km < 420.0, "unexpected distance {km}");
        assert_eq!(tokyo.distance_km(&tokyo), 0.0);
    }
}
