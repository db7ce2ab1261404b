//! Closed option sets for each pricing axis

named_enum! {
    /// Overall trip style; cascades defaults into other selections
    pub enum TravelStyle {
        Budget => "budget",
        Midrange => "midrange",
        Luxury => "luxury",
    }
}

named_enum! {
    pub enum AirlineType {
        Budget => "budget",
        FullService => "fullService",
    }
}

named_enum! {
    pub enum AccommodationType {
        Hostel => "hostel",
        BusinessHotel => "businessHotel",
        Midrange => "midrange",
        Luxury => "luxury",
    }
}

named_enum! {
    /// Japan Rail pass duration tier
    pub enum JrPassType {
        None => "none",
        SevenDay => "7day",
        FourteenDay => "14day",
        TwentyOneDay => "21day",
    }
}

named_enum! {
    /// Airport-to-city transfer product, priced one way
    pub enum TransferMode {
        Nex => "nex",
        Haruka => "haruka",
        LimousineBus => "limousineBus",
        RegularTrain => "regularTrain",
    }
}

named_enum! {
    pub enum RentalCompany {
        Toyota => "toyota",
        Nippon => "nippon",
        Times => "times",
        Orix => "orix",
        Budget => "budget",
        None => "none",
    }
}

named_enum! {
    pub enum FoodTier {
        Budget => "budget",
        Midrange => "midrange",
        Splurge => "splurge",
    }
}

named_enum! {
    /// Mobile data plan bought for the trip
    pub enum Connectivity {
        None => "none",
        PocketWifi => "pocket-wifi",
        Esim => "esim",
        TouristSim => "tourist-sim",
    }
}

named_enum! {
    pub enum ActivityCategory {
        ThemePark => "theme_park",
        Museum => "museum",
        Temple => "temple",
        Experience => "experience",
        DayTrip => "day_trip",
    }
}

/// Daily rental rate of a pocket wifi router
pub const POCKET_WIFI_DAILY: f64 = 8.0;
/// Flat price of an eSIM data plan
pub const ESIM_COST: f64 = 25.0;
/// Flat price of a physical tourist SIM
pub const TOURIST_SIM_COST: f64 = 30.0;
/// Per-person emergency reserve folded into shopping
pub const EMERGENCY_FUND_PER_PERSON: f64 = 100.0;

impl TravelStyle {
    /// Display label used in exports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TravelStyle::Budget => "Budget",
            TravelStyle::Midrange => "Mid-Range",
            TravelStyle::Luxury => "Luxury",
        }
    }
}

impl AccommodationType {
    /// Hostels are booked per bed, everything else as twin rooms
    #[must_use]
    pub fn rooms_needed(self, travelers: u32) -> u32 {
        match self {
            AccommodationType::Hostel => travelers,
            _ => travelers.div_ceil(2),
        }
    }
}

impl Connectivity {
    /// Cost of the plan for the whole group over `nights`
    #[must_use]
    pub fn cost(self, nights: u32) -> f64 {
        match self {
            Connectivity::PocketWifi => POCKET_WIFI_DAILY * f64::from(nights),
            Connectivity::Esim => ESIM_COST,
            Connectivity::TouristSim => TOURIST_SIM_COST,
            Connectivity::None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(AccommodationType::Hostel, 1, 1)]
    #[case(AccommodationType::Hostel, 2, 2)]
    #[case(AccommodationType::Hostel, 4, 4)]
    #[case(AccommodationType::BusinessHotel, 1, 1)]
    #[case(AccommodationType::BusinessHotel, 2, 1)]
    #[case(AccommodationType::BusinessHotel, 3, 2)]
    #[case(AccommodationType::BusinessHotel, 4, 2)]
    #[case(AccommodationType::Luxury, 5, 3)]
    fn test_rooms_needed(
        #[case] kind: AccommodationType,
        #[case] travelers: u32,
        #[case] rooms: u32,
    ) {
        assert_eq!(kind.rooms_needed(travelers), rooms);
    }

    #[rstest]
    #[case(Connectivity::PocketWifi, 7, 56.0)]
    #[case(Connectivity::PocketWifi, 14, 112.0)]
    #[case(Connectivity::PocketWifi, 1, 8.0)]
    #[case(Connectivity::Esim, 1, 25.0)]
    #[case(Connectivity::Esim, 7, 25.0)]
    #[case(Connectivity::Esim, 14, 25.0)]
    #[case(Connectivity::Esim, 30, 25.0)]
    #[case(Connectivity::TouristSim, 7, 30.0)]
    #[case(Connectivity::TouristSim, 14, 30.0)]
    #[case(Connectivity::None, 7, 0.0)]
    fn test_connectivity_cost(
        #[case] plan: Connectivity,
        #[case] nights: u32,
        #[case] expected: f64,
    ) {
        assert_eq!(plan.cost(nights), expected);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(JrPassType::SevenDay.as_str(), "7day");
        assert_eq!(TransferMode::LimousineBus.to_string(), "limousineBus");
        assert_eq!(Connectivity::from_str("pocket-wifi").unwrap(), Connectivity::PocketWifi);
        assert_eq!(AirlineType::from_str("fullservice").unwrap(), AirlineType::FullService);
        assert!(FoodTier::from_str("gourmet").is_err());
    }

    #[test]
    fn test_serde_round_names() {
        let json = serde_json::to_string(&AccommodationType::BusinessHotel).unwrap();
        assert_eq!(json, "\"businessHotel\"");
        let plan: Connectivity = serde_json::from_str("\"tourist-sim\"").unwrap();
        assert_eq!(plan, Connectivity::TouristSim);
    }
}
