//! Demand seasons and their price multipliers

use chrono::{Datelike, NaiveDate};

named_enum! {
    /// Demand period derived from the departure date
    pub enum Season {
        Regular => "regular",
        CherryBlossom => "cherryBlossom",
        Autumn => "autumn",
        YearEnd => "yearEnd",
    }
}

impl Season {
    /// Resolve the season for a calendar date. First matching rule wins.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let (month, day) = (date.month(), date.day());

        if (month == 3 && day >= 20) || (month == 4 && day <= 15) {
            return Season::CherryBlossom;
        }
        if month == 11 || (month == 10 && day >= 20) {
            return Season::Autumn;
        }
        if (month == 12 && day >= 20) || (month == 1 && day <= 7) {
            return Season::YearEnd;
        }
        Season::Regular
    }

    /// Factor applied to flight and accommodation costs
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Season::Regular => 1.0,
            Season::CherryBlossom => 1.35,
            Season::Autumn => 1.25,
            Season::YearEnd => 1.40,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Season::Regular => "Regular season",
            Season::CherryBlossom => "Cherry blossom season",
            Season::Autumn => "Autumn foliage season",
            Season::YearEnd => "Year-end holidays",
        }
    }
}

/// Season for an optional departure date; unknown dates count as regular
#[must_use]
pub fn season_for(departure: Option<NaiveDate>) -> Season {
    departure.map_or(Season::Regular, Season::from_date)
}
