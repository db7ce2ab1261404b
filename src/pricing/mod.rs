//! Static price reference data
//!
//! The [`PricingTable`] is built once at startup, either from the built-in
//! figures or from a JSON file, and shared read-only afterwards. Lookups for
//! combinations missing from a custom table price at zero.

pub mod activities;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PricingConfig;
use crate::models::{
    AccommodationType, AirlineType, City, FoodTier, JrPassType, RentalCompany, TransferMode,
};
pub use activities::{Activity, default_activities};

/// Return flight price per person, by airline class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightFares {
    pub budget: f64,
    pub full_service: f64,
}

impl FlightFares {
    #[must_use]
    pub fn price(&self, airline: AirlineType) -> f64 {
        match airline {
            AirlineType::Budget => self.budget,
            AirlineType::FullService => self.full_service,
        }
    }
}

/// Nightly room rate, by accommodation type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightlyRates {
    pub hostel: f64,
    pub business_hotel: f64,
    pub midrange: f64,
    pub luxury: f64,
}

impl NightlyRates {
    #[must_use]
    pub fn rate(&self, kind: AccommodationType) -> f64 {
        match kind {
            AccommodationType::Hostel => self.hostel,
            AccommodationType::BusinessHotel => self.business_hotel,
            AccommodationType::Midrange => self.midrange,
            AccommodationType::Luxury => self.luxury,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRental {
    pub daily_rate: f64,
    pub name: String,
    pub description: String,
}

/// Bounds of the adjustable daily food budget for a tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodBudget {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl FoodBudget {
    /// Clamp a requested daily budget into this tier's range
    #[must_use]
    pub fn clamp(&self, daily: f64) -> f64 {
        daily.clamp(self.min, self.max)
    }
}

/// All prices the calculator reads, in SGD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTable {
    pub flights: HashMap<City, FlightFares>,
    pub accommodation: HashMap<City, NightlyRates>,
    pub jr_pass: HashMap<JrPassType, f64>,
    pub airport_transfers: HashMap<TransferMode, f64>,
    pub car_rentals: HashMap<RentalCompany, CarRental>,
    pub food: HashMap<FoodTier, FoodBudget>,
    pub activities: Vec<Activity>,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn fares(budget: f64, full_service: f64) -> FlightFares {
    FlightFares {
        budget,
        full_service,
    }
}

fn rates(hostel: f64, business_hotel: f64, midrange: f64, luxury: f64) -> NightlyRates {
    NightlyRates {
        hostel,
        business_hotel,
        midrange,
        luxury,
    }
}

fn rental(daily_rate: f64, name: &str, description: &str) -> CarRental {
    CarRental {
        daily_rate,
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn food(min: f64, max: f64, average: f64, examples: &[&str]) -> FoodBudget {
    FoodBudget {
        min,
        max,
        average,
        examples: examples.iter().map(|e| (*e).to_string()).collect(),
    }
}

impl PricingTable {
    /// Built-in prices
    #[must_use]
    pub fn standard() -> Self {
        let flights = HashMap::from([
            (City::Tokyo, fares(350.0, 650.0)),
            (City::Osaka, fares(320.0, 600.0)),
            (City::Kyoto, fares(350.0, 650.0)),
            (City::Hokkaido, fares(400.0, 750.0)),
            (City::Fukuoka, fares(300.0, 580.0)),
            (City::Okinawa, fares(380.0, 700.0)),
            (City::Nagoya, fares(340.0, 620.0)),
            (City::Hiroshima, fares(360.0, 680.0)),
            (City::Nara, fares(350.0, 650.0)),
            (City::Yokohama, fares(350.0, 650.0)),
        ]);

        let accommodation = HashMap::from([
            (City::Tokyo, rates(50.0, 100.0, 180.0, 400.0)),
            (City::Osaka, rates(40.0, 80.0, 150.0, 350.0)),
            (City::Kyoto, rates(45.0, 90.0, 170.0, 450.0)),
            (City::Hokkaido, rates(45.0, 85.0, 160.0, 380.0)),
            (City::Fukuoka, rates(35.0, 70.0, 130.0, 300.0)),
            (City::Okinawa, rates(40.0, 75.0, 140.0, 350.0)),
            (City::Nagoya, rates(38.0, 75.0, 140.0, 320.0)),
            (City::Hiroshima, rates(35.0, 70.0, 130.0, 300.0)),
            (City::Nara, rates(40.0, 80.0, 150.0, 350.0)),
            (City::Yokohama, rates(45.0, 90.0, 165.0, 380.0)),
        ]);

        let jr_pass = HashMap::from([
            (JrPassType::None, 0.0),
            (JrPassType::SevenDay, 380.0),
            (JrPassType::FourteenDay, 610.0),
            (JrPassType::TwentyOneDay, 780.0),
        ]);

        let airport_transfers = HashMap::from([
            (TransferMode::Nex, 40.0),
            (TransferMode::Haruka, 35.0),
            (TransferMode::LimousineBus, 25.0),
            (TransferMode::RegularTrain, 15.0),
        ]);

        let car_rentals = HashMap::from([
            (
                RentalCompany::None,
                rental(0.0, "No car rental", "Use public transport only"),
            ),
            (
                RentalCompany::Toyota,
                rental(55.0, "Toyota Rent a Car", "Largest network, reliable service"),
            ),
            (
                RentalCompany::Nippon,
                rental(50.0, "Nippon Rent-A-Car", "Good English support, wide coverage"),
            ),
            (
                RentalCompany::Times,
                rental(45.0, "Times Car Rental", "Budget-friendly, popular choice"),
            ),
            (
                RentalCompany::Orix,
                rental(48.0, "ORIX Rent A Car", "Good for long-term rentals"),
            ),
            (
                RentalCompany::Budget,
                rental(40.0, "Budget Rent A Car", "International brand, familiar service"),
            ),
        ]);

        let food_tiers = HashMap::from([
            (
                FoodTier::Budget,
                food(20.0, 35.0, 28.0, &["Konbini meals", "Ramen", "Gyudon chains", "Udon"]),
            ),
            (
                FoodTier::Midrange,
                food(
                    40.0,
                    70.0,
                    55.0,
                    &["Izakaya", "Family restaurants", "Sushi-go-round", "Tonkatsu"],
                ),
            ),
            (
                FoodTier::Splurge,
                food(
                    100.0,
                    250.0,
                    150.0,
                    &["Omakase sushi", "Kaiseki", "Wagyu beef", "Michelin restaurants"],
                ),
            ),
        ]);

        Self {
            flights,
            accommodation,
            jr_pass,
            airport_transfers,
            car_rentals,
            food: food_tiers,
            activities: default_activities(),
        }
    }

    /// Load a table from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pricing table: {}", path.display()))?;
        let table: PricingTable = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse pricing table: {}", path.display()))?;
        info!(
            "Loaded pricing table from {} ({} activities)",
            path.display(),
            table.activities.len()
        );
        Ok(table)
    }

    #[must_use]
    pub fn flight_price(&self, city: City, airline: AirlineType) -> f64 {
        self.flights.get(&city).map_or(0.0, |f| f.price(airline))
    }

    #[must_use]
    pub fn nightly_rate(&self, city: City, kind: AccommodationType) -> f64 {
        self.accommodation.get(&city).map_or(0.0, |r| r.rate(kind))
    }

    #[must_use]
    pub fn jr_pass_price(&self, pass: JrPassType) -> f64 {
        self.jr_pass.get(&pass).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn transfer_price(&self, mode: TransferMode) -> f64 {
        self.airport_transfers.get(&mode).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn car_daily_rate(&self, company: RentalCompany) -> f64 {
        if company == RentalCompany::None {
            return 0.0;
        }
        self.car_rentals.get(&company).map_or(0.0, |c| c.daily_rate)
    }

    #[must_use]
    pub fn food_budget(&self, tier: FoodTier) -> Option<&FoodBudget> {
        self.food.get(&tier)
    }

    #[must_use]
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Curated activities located in `city`
    pub fn activities_in(&self, city: City) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(move |a| a.city == city)
    }
}

/// Table named in configuration, or the built-in one
pub fn load_pricing(config: &PricingConfig) -> Result<PricingTable> {
    match &config.table_path {
        Some(path) => PricingTable::load_from_path(path),
        None => Ok(PricingTable::standard()),
    }
}
