//! Budget aggregation
//!
//! Turns a trip, the user's selections and the pricing table into a
//! [`CostBreakdown`]. The functions here are pure: no I/O, no shared state,
//! and identical inputs always give an identical breakdown. Inputs are
//! expected to have passed [`TripConfig::validate`] already.

use crate::currency::convert_to_jpy;
use crate::models::{CostBreakdown, EMERGENCY_FUND_PER_PERSON, SelectionState, TripConfig};
use crate::pricing::PricingTable;

/// Return flights for the whole group
#[must_use]
pub fn flights_cost(
    config: &TripConfig,
    selection: &SelectionState,
    pricing: &PricingTable,
) -> f64 {
    let destination = selection.effective_destination(&config.cities);
    let per_person = pricing.flight_price(destination, selection.airline_type);
    (per_person * f64::from(config.travelers) * config.season_multiplier()).round()
}

/// Mean nightly rate over the selected cities, zero when none are selected
#[must_use]
pub fn average_nightly_rate(
    config: &TripConfig,
    selection: &SelectionState,
    pricing: &PricingTable,
) -> f64 {
    if config.cities.is_empty() {
        return 0.0;
    }
    let sum: f64 = config
        .cities
        .iter()
        .map(|city| pricing.nightly_rate(*city, selection.accommodation_type))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let count = config.cities.len() as f64;
    sum / count
}

#[must_use]
pub fn accommodation_cost(
    config: &TripConfig,
    selection: &SelectionState,
    pricing: &PricingTable,
) -> f64 {
    let rooms = selection.accommodation_type.rooms_needed(config.travelers);
    (average_nightly_rate(config, selection, pricing)
        * f64::from(config.nights())
        * f64::from(rooms)
        * config.season_multiplier())
    .round()
}

/// JR pass, IC card top-ups, return airport transfer and car hire
#[must_use]
pub fn transportation_cost(
    config: &TripConfig,
    selection: &SelectionState,
    pricing: &PricingTable,
) -> f64 {
    let travelers = f64::from(config.travelers);
    let nights = f64::from(config.nights());

    let jr_pass = pricing.jr_pass_price(selection.jr_pass) * travelers;
    let ic_card = selection.ic_card_daily * nights * travelers;
    let transfer = pricing.transfer_price(selection.airport_transfer) * travelers * 2.0;
    let car = pricing.car_daily_rate(selection.car_rental) * f64::from(selection.car_rental_days);

    jr_pass + ic_card + transfer + car
}

#[must_use]
pub fn food_cost(config: &TripConfig, selection: &SelectionState) -> f64 {
    selection.daily_food_budget * f64::from(config.nights()) * f64::from(config.travelers)
}

/// Sum of selected activity prices; ids missing from the table add nothing
#[must_use]
pub fn activities_cost(
    config: &TripConfig,
    selection: &SelectionState,
    pricing: &PricingTable,
) -> f64 {
    let travelers = f64::from(config.travelers);
    selection
        .selected_activities
        .iter()
        .filter_map(|id| pricing.activity(id))
        .map(|activity| activity.price_sgd * travelers)
        .sum()
}

/// Shopping allowance and emergency reserve per person, plus connectivity
#[must_use]
pub fn shopping_cost(config: &TripConfig, selection: &SelectionState) -> f64 {
    (selection.shopping_budget + EMERGENCY_FUND_PER_PERSON) * f64::from(config.travelers)
        + selection.connectivity.cost(config.nights())
}

/// Compute the full breakdown. `exchange_rate` is SGD per JPY.
#[must_use]
pub fn compute_breakdown(
    config: &TripConfig,
    selection: &SelectionState,
    pricing: &PricingTable,
    exchange_rate: f64,
) -> CostBreakdown {
    let flights = flights_cost(config, selection, pricing);
    let accommodation = accommodation_cost(config, selection, pricing);
    let transportation = transportation_cost(config, selection, pricing);
    let food = food_cost(config, selection);
    let activities = activities_cost(config, selection, pricing);
    let shopping = shopping_cost(config, selection);

    let total = flights + accommodation + transportation + food + activities + shopping;

    let per_person = if config.travelers > 0 {
        (total / f64::from(config.travelers)).round()
    } else {
        0.0
    };
    let nights = config.nights();
    let daily_average = if nights > 0 {
        (total / f64::from(nights)).round()
    } else {
        0.0
    };

    CostBreakdown {
        flights,
        accommodation,
        transportation,
        food,
        activities,
        shopping,
        total,
        per_person,
        daily_average,
        total_jpy: convert_to_jpy(total, exchange_rate),
        per_person_jpy: convert_to_jpy(per_person, exchange_rate),
    }
}
