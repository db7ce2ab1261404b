//! `japan-budget` - Japan trip budget estimation for travellers from Singapore
//!
//! This library provides the pricing data, the budget calculator and its
//! season/currency helpers, plus the HTTP API and the upstream integrations
//! (exchange rate, weather, attractions) that surround them.

#[macro_use]
mod macros;

pub mod api;
pub mod attractions;
pub mod cache;
pub mod calculator;
pub mod config;
pub mod currency;
pub mod error;
pub mod exchange_rate;
pub mod export;
pub mod http;
pub mod itinerary;
pub mod models;
pub mod pricing;
pub mod season;
pub mod telemetry;
pub mod tips;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use cache::TtlCache;
pub use calculator::compute_breakdown;
pub use config::BudgetConfig;
pub use currency::{Currency, DEFAULT_EXCHANGE_RATE, convert_to_jpy, format_currency};
pub use error::BudgetError;
pub use exchange_rate::{ExchangeRate, ExchangeRateProvider};
pub use models::{City, CostBreakdown, CostCategory, SelectionState, TravelStyle, TripConfig};
pub use pricing::PricingTable;
pub use season::Season;
pub use telemetry::init_tracing;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
