//! Cost breakdown produced by the calculator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{City, TravelStyle, TripConfig};

named_enum! {
    /// Breakdown categories in display order
    pub enum CostCategory {
        Flights => "flights",
        Accommodation => "accommodation",
        Transportation => "transportation",
        Food => "food",
        Activities => "activities",
        Shopping => "shopping",
    }
}

impl CostCategory {
    /// Label used in summaries and exports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CostCategory::Flights => "Flights",
            CostCategory::Accommodation => "Accommodation",
            CostCategory::Transportation => "Transportation",
            CostCategory::Food => "Food & Dining",
            CostCategory::Activities => "Activities",
            CostCategory::Shopping => "Shopping & Misc",
        }
    }

    /// Compact label for charts
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            CostCategory::Transportation => "Transport",
            CostCategory::Food => "Food",
            CostCategory::Shopping => "Shopping",
            other => other.label(),
        }
    }
}

/// Per-category trip costs in SGD, with the headline figures also in yen
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub flights: f64,
    pub accommodation: f64,
    pub transportation: f64,
    pub food: f64,
    pub activities: f64,
    pub shopping: f64,
    pub total: f64,
    pub per_person: f64,
    pub daily_average: f64,
    #[serde(rename = "totalJPY")]
    pub total_jpy: i64,
    #[serde(rename = "perPersonJPY")]
    pub per_person_jpy: i64,
}

/// One non-empty category of the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slice {
    pub category: CostCategory,
    pub label: &'static str,
    pub amount: f64,
}

/// Projected spend for a single trip day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCost {
    pub day: String,
    pub accommodation: f64,
    pub food: f64,
    pub transport: f64,
    pub activities: f64,
}

/// Longest daily projection the chart shows
pub const MAX_PROFILE_DAYS: u32 = 14;

impl CostBreakdown {
    #[must_use]
    pub fn amount(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Flights => self.flights,
            CostCategory::Accommodation => self.accommodation,
            CostCategory::Transportation => self.transportation,
            CostCategory::Food => self.food,
            CostCategory::Activities => self.activities,
            CostCategory::Shopping => self.shopping,
        }
    }

    /// Every category paired with its amount, in display order
    pub fn categories(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        CostCategory::ALL.iter().map(|c| (*c, self.amount(*c)))
    }

    #[must_use]
    pub fn category_sum(&self) -> f64 {
        self.categories().map(|(_, amount)| amount).sum()
    }

    /// Categories with a positive amount
    #[must_use]
    pub fn slices(&self) -> Vec<Slice> {
        self.categories()
            .filter(|(_, amount)| *amount > 0.0)
            .map(|(category, amount)| Slice {
                category,
                label: category.short_label(),
                amount,
            })
            .collect()
    }

    /// Even per-day split of the recurring categories, capped at two weeks
    #[must_use]
    pub fn daily_profile(&self, nights: u32) -> Vec<DailyCost> {
        if nights == 0 {
            return Vec::new();
        }
        let per_day = |amount: f64| (amount / f64::from(nights)).round();
        (1..=nights.min(MAX_PROFILE_DAYS))
            .map(|day| DailyCost {
                day: format!("Day {day}"),
                accommodation: per_day(self.accommodation),
                food: per_day(self.food),
                transport: per_day(self.transportation),
                activities: per_day(self.activities),
            })
            .collect()
    }
}

/// Record of one completed calculation, emitted to the log
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEvent {
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub travelers: u32,
    pub cities: Vec<City>,
    pub travel_style: TravelStyle,
    pub total_budget_sgd: f64,
    pub per_person_sgd: f64,
    pub exchange_rate: f64,
    pub breakdown: CostBreakdown,
}

impl BudgetEvent {
    #[must_use]
    pub fn new(config: &TripConfig, breakdown: &CostBreakdown, exchange_rate: f64) -> Self {
        Self {
            departure_date: config.departure_date,
            return_date: config.return_date,
            travelers: config.travelers,
            cities: config.cities.clone(),
            travel_style: config.travel_style,
            total_budget_sgd: breakdown.total,
            per_person_sgd: breakdown.per_person,
            exchange_rate,
            breakdown: *breakdown,
        }
    }

    pub fn emit(&self) {
        let cities = self
            .cities
            .iter()
            .map(|city| city.as_str())
            .collect::<Vec<_>>()
            .join(",");
        info!(
            target: "japan_budget::analytics",
            travelers = self.travelers,
            cities = %cities,
            style = %self.travel_style,
            total_sgd = self.total_budget_sgd,
            per_person_sgd = self.per_person_sgd,
            exchange_rate = self.exchange_rate,
            flights = self.breakdown.flights,
            accommodation = self.breakdown.accommodation,
            transportation = self.breakdown.transportation,
            food = self.breakdown.food,
            activities = self.breakdown.activities,
            shopping = self.breakdown.shopping,
            "budget calculated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostBreakdown {
        CostBreakdown {
            flights: 700.0,
            accommodation: 700.0,
            transportation: 260.0,
            food: 770.0,
            activities: 0.0,
            shopping: 625.0,
            total: 3055.0,
            per_person: 1528.0,
            daily_average: 436.0,
            total_jpy: 343_258,
            per_person_jpy: 171_629,
        }
    }

    #[test]
    fn test_categories_are_ordered() {
        let breakdown = sample();
        let order: Vec<_> = breakdown.categories().map(|(c, _)| c).collect();
        assert_eq!(order, CostCategory::ALL);
        assert_eq!(breakdown.category_sum(), breakdown.total);
    }

    #[test]
    fn test_slices_skip_empty_categories() {
        let slices = sample().slices();
        assert_eq!(slices.len(), 5);
        assert!(slices.iter().all(|s| s.category != CostCategory::Activities));
        assert_eq!(slices[2].label, "Transport");
    }

    #[test]
    fn test_daily_profile() {
        let profile = sample().daily_profile(7);
        assert_eq!(profile.len(), 7);
        assert_eq!(profile[0].day, "Day 1");
        assert_eq!(profile[6].accommodation, 100.0);
        assert_eq!(profile[0].food, 110.0);
        assert_eq!(profile[0].transport, 37.0);

        assert_eq!(sample().daily_profile(30).len(), 14);
        assert!(sample().daily_profile(0).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CostCategory::Food.label(), "Food & Dining");
        assert_eq!(CostCategory::Shopping.label(), "Shopping & Misc");
        assert_eq!(CostCategory::Flights.short_label(), "Flights");
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["perPerson"], 1528.0);
        assert_eq!(json["dailyAverage"], 436.0);
        assert_eq!(json["totalJPY"], 343_258);
    }
}
