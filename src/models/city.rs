//! Destination cities and their static reference data

use super::GeoPoint;

named_enum! {
    /// One of the fixed destinations the estimator prices
    pub enum City {
        Tokyo => "Tokyo",
        Osaka => "Osaka",
        Kyoto => "Kyoto",
        Hokkaido => "Hokkaido",
        Fukuoka => "Fukuoka",
        Okinawa => "Okinawa",
        Nagoya => "Nagoya",
        Hiroshima => "Hiroshima",
        Nara => "Nara",
        Yokohama => "Yokohama",
    }
}

impl City {
    /// IATA codes of the arrival airport(s)
    #[must_use]
    pub fn airport_codes(self) -> &'static str {
        match self {
            City::Tokyo | City::Yokohama => "NRT/HND",
            City::Osaka | City::Kyoto | City::Nara => "KIX",
            City::Hokkaido => "CTS",
            City::Fukuoka => "FUK",
            City::Okinawa => "OKA",
            City::Nagoya => "NGO",
            City::Hiroshima => "HIJ",
        }
    }

    #[must_use]
    pub fn airport_name(self) -> &'static str {
        match self {
            City::Tokyo | City::Yokohama => "Narita / Haneda",
            City::Osaka | City::Kyoto | City::Nara => "Kansai International",
            City::Hokkaido => "New Chitose",
            City::Fukuoka => "Fukuoka Airport",
            City::Okinawa => "Naha Airport",
            City::Nagoya => "Chubu Centrair",
            City::Hiroshima => "Hiroshima Airport",
        }
    }

    /// City centre used for weather and attraction lookups
    #[must_use]
    pub fn centre(self) -> GeoPoint {
        match self {
            City::Tokyo => GeoPoint::new(35.6762, 139.6503),
            City::Osaka => GeoPoint::new(34.6937, 135.5023),
            City::Kyoto => GeoPoint::new(35.0116, 135.7681),
            City::Hokkaido => GeoPoint::new(43.0618, 141.3545),
            City::Fukuoka => GeoPoint::new(33.5904, 130.4017),
            City::Okinawa => GeoPoint::new(26.2124, 127.6809),
            City::Nagoya => GeoPoint::new(35.1815, 136.9066),
            City::Hiroshima => GeoPoint::new(34.3853, 132.4553),
            City::Nara => GeoPoint::new(34.6851, 135.8048),
            City::Yokohama => GeoPoint::new(35.4437, 139.6380),
        }
    }

    /// Search radius for attraction discovery, in metres
    #[must_use]
    pub fn search_radius_m(self) -> u32 {
        match self {
            City::Hokkaido => 50_000,
            _ => 15_000,
        }
    }

    /// Human-readable flight route from Singapore
    #[must_use]
    pub fn flight_route(self) -> String {
        format!("Singapore (SIN) → {} ({})", self, self.airport_codes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_cities() {
        assert_eq!(City::ALL.len(), 10);
        assert_eq!(City::ALL[0], City::Tokyo);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(City::from_str("kyoto").unwrap(), City::Kyoto);
        assert_eq!(City::from_str(" HOKKAIDO ").unwrap(), City::Hokkaido);
        assert!(City::from_str("Paris").is_err());
    }

    #[test]
    fn test_flight_route() {
        assert_eq!(City::Tokyo.flight_route(), "Singapore (SIN) → Tokyo (NRT/HND)");
        assert_eq!(City::Nara.flight_route(), "Singapore (SIN) → Nara (KIX)");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&City::Hiroshima).unwrap();
        assert_eq!(json, "\"Hiroshima\"");
        let parsed: City = serde_json::from_str("\"Yokohama\"").unwrap();
        assert_eq!(parsed, City::Yokohama);
    }
}
