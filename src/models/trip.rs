//! Trip configuration and the user's per-axis selections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    AccommodationType, AirlineType, City, Connectivity, FoodTier, JrPassType, RentalCompany,
    TransferMode, TravelStyle,
};
use crate::error::BudgetError;
use crate::pricing::PricingTable;
use crate::season::{Season, season_for};

pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 20;
/// Nights assumed while either date is still missing
pub const DEFAULT_NIGHTS: u32 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripConfig {
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    pub travelers: u32,
    pub cities: Vec<City>,
    pub travel_style: TravelStyle,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            departure_date: None,
            return_date: None,
            travelers: 2,
            cities: vec![City::Tokyo],
            travel_style: TravelStyle::Midrange,
        }
    }
}

impl TripConfig {
    /// Nights between the two dates, at least one; 7 while a date is missing
    #[must_use]
    pub fn nights(&self) -> u32 {
        match (self.departure_date, self.return_date) {
            (Some(depart), Some(ret)) => {
                let days = (ret - depart).num_days();
                u32::try_from(days.max(1)).unwrap_or(u32::MAX)
            }
            _ => DEFAULT_NIGHTS,
        }
    }

    /// Season of the departure date, regular when unknown
    #[must_use]
    pub fn season(&self) -> Season {
        season_for(self.departure_date)
    }

    #[must_use]
    pub fn season_multiplier(&self) -> f64 {
        self.season().multiplier()
    }

    /// Force the traveler count into the supported range
    pub fn clamp_travelers(&mut self) {
        self.travelers = self.travelers.clamp(MIN_TRAVELERS, MAX_TRAVELERS);
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&self.travelers) {
            return Err(BudgetError::invalid_selection(format!(
                "travelers must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}, got {}",
                self.travelers
            )));
        }
        if self.cities.is_empty() {
            return Err(BudgetError::invalid_selection(
                "at least one city must be selected",
            ));
        }
        if let (Some(depart), Some(ret)) = (self.departure_date, self.return_date)
            && ret <= depart
        {
            return Err(BudgetError::invalid_selection(format!(
                "return date {ret} must be after departure date {depart}"
            )));
        }
        Ok(())
    }
}

/// Selections produced by a travel-style change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefaults {
    pub airline_type: AirlineType,
    pub accommodation_type: AccommodationType,
    pub food_tier: FoodTier,
    pub daily_food_budget: f64,
}

/// Fallback daily budget when a custom table lacks the tier
const FALLBACK_DAILY_FOOD: f64 = 55.0;

/// Map a travel style to its default airline, lodging and food choices
#[must_use]
pub fn apply_travel_style(style: TravelStyle, pricing: &PricingTable) -> StyleDefaults {
    let (airline_type, accommodation_type, food_tier) = match style {
        TravelStyle::Budget => (
            AirlineType::Budget,
            AccommodationType::Hostel,
            FoodTier::Budget,
        ),
        TravelStyle::Midrange => (
            AirlineType::Budget,
            AccommodationType::BusinessHotel,
            FoodTier::Midrange,
        ),
        TravelStyle::Luxury => (
            AirlineType::FullService,
            AccommodationType::Luxury,
            FoodTier::Splurge,
        ),
    };
    let daily_food_budget = pricing
        .food_budget(food_tier)
        .map_or(FALLBACK_DAILY_FOOD, |tier| tier.average);

    StyleDefaults {
        airline_type,
        accommodation_type,
        food_tier,
        daily_food_budget,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionState {
    pub destination: City,
    pub airline_type: AirlineType,
    pub accommodation_type: AccommodationType,
    pub jr_pass: JrPassType,
    pub ic_card_daily: f64,
    pub airport_transfer: TransferMode,
    pub car_rental: RentalCompany,
    pub car_rental_days: u32,
    pub food_tier: FoodTier,
    pub daily_food_budget: f64,
    pub selected_activities: Vec<String>,
    pub shopping_budget: f64,
    pub connectivity: Connectivity,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            destination: City::Tokyo,
            airline_type: AirlineType::Budget,
            accommodation_type: AccommodationType::BusinessHotel,
            jr_pass: JrPassType::None,
            ic_card_daily: 15.0,
            airport_transfer: TransferMode::LimousineBus,
            car_rental: RentalCompany::None,
            car_rental_days: 3,
            food_tier: FoodTier::Midrange,
            daily_food_budget: 55.0,
            selected_activities: Vec::new(),
            shopping_budget: 200.0,
            connectivity: Connectivity::Esim,
        }
    }
}

impl SelectionState {
    /// Default selections with a travel style already applied
    #[must_use]
    pub fn for_style(style: TravelStyle, pricing: &PricingTable) -> Self {
        Self::default().with_style_defaults(apply_travel_style(style, pricing))
    }

    #[must_use]
    pub fn with_style_defaults(mut self, defaults: StyleDefaults) -> Self {
        self.airline_type = defaults.airline_type;
        self.accommodation_type = defaults.accommodation_type;
        self.food_tier = defaults.food_tier;
        self.daily_food_budget = defaults.daily_food_budget;
        self
    }

    /// Switch food tier and reset the daily budget to its average
    pub fn select_food_tier(&mut self, tier: FoodTier, pricing: &PricingTable) {
        self.food_tier = tier;
        if let Some(bounds) = pricing.food_budget(tier) {
            self.daily_food_budget = bounds.average;
        }
    }

    /// Set the daily food budget, clamped into the current tier's range
    pub fn set_daily_food_budget(&mut self, daily: f64, pricing: &PricingTable) {
        self.daily_food_budget = match pricing.food_budget(self.food_tier) {
            Some(bounds) => bounds.clamp(daily),
            None => daily.max(0.0),
        };
    }

    /// Keep the destination inside the selected cities
    pub fn reconcile_destination(&mut self, cities: &[City]) {
        if let Some(first) = cities.first()
            && !cities.contains(&self.destination)
        {
            self.destination = *first;
        }
    }

    /// Bring request-supplied selections back inside their invariants: the
    /// destination must be one of `cities` and the daily food budget must lie
    /// within the chosen tier.
    pub fn normalize(&mut self, cities: &[City], pricing: &PricingTable) {
        self.reconcile_destination(cities);
        self.set_daily_food_budget(self.daily_food_budget, pricing);
    }

    /// Destination actually priced for flights
    #[must_use]
    pub fn effective_destination(&self, cities: &[City]) -> City {
        if cities.is_empty() || cities.contains(&self.destination) {
            self.destination
        } else {
            cities[0]
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("icCardDaily", self.ic_card_daily),
            ("dailyFoodBudget", self.daily_food_budget),
            ("shoppingBudget", self.shopping_budget),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BudgetError::invalid_selection(format!(
                    "{name} must be a non-negative amount, got {value}"
                )));
            }
        }
        Ok(())
    }
}
