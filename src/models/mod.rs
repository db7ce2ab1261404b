//! Domain models for the budget estimator
//!
//! Organized by concern:
//! - City: destination reference data
//! - Location: geographic coordinates
//! - Options: the closed choice sets for each pricing axis
//! - Trip: trip configuration and user selections
//! - Breakdown: calculator output and chart views

pub mod breakdown;
pub mod city;
pub mod location;
pub mod options;
pub mod trip;

// Re-export all public types for convenient access
pub use breakdown::{BudgetEvent, CostBreakdown, CostCategory, DailyCost, Slice};
pub use city::City;
pub use location::GeoPoint;
pub use options::{
    AccommodationType, ActivityCategory, AirlineType, Connectivity, EMERGENCY_FUND_PER_PERSON,
    ESIM_COST, FoodTier, JrPassType, POCKET_WIFI_DAILY, RentalCompany, TOURIST_SIM_COST,
    TransferMode, TravelStyle,
};
pub use trip::{SelectionState, StyleDefaults, TripConfig, apply_travel_style};
