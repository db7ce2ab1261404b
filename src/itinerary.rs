//! Day-by-day activity suggestions built from the curated catalogue

use serde::Serialize;

use crate::models::{City, GeoPoint};
use crate::pricing::{Activity, PricingTable};

/// Most stops planned into a single day
pub const MAX_STOPS_PER_DAY: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryStop {
    #[serde(flatten)]
    pub activity: Activity,
    pub maps_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: u32,
    pub stops: Vec<ItineraryStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub city: City,
    pub days: Vec<ItineraryDay>,
    /// Sum of per-person entry prices, SGD
    pub total_budget: f64,
}

impl Itinerary {
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.days.iter().map(|d| d.stops.len()).sum()
    }
}

/// Reorder stops so each one is the closest unvisited stop to the previous.
/// Stops without coordinates keep their relative order at the end.
fn order_by_proximity(stops: Vec<ItineraryStop>) -> Vec<ItineraryStop> {
    let (mut located, unlocated): (Vec<_>, Vec<_>) =
        stops.into_iter().partition(|s| s.activity.location.is_some());

    let mut ordered = Vec::with_capacity(located.len() + unlocated.len());
    let mut current: Option<GeoPoint> = None;

    while !located.is_empty() {
        let next = match current {
            None => 0,
            Some(from) => located
                .iter()
                .enumerate()
                .filter_map(|(i, s)| s.activity.location.map(|p| (i, from.distance_km(&p))))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map_or(0, |(i, _)| i),
        };
        let stop = located.remove(next);
        current = stop.activity.location;
        ordered.push(stop);
    }

    ordered.extend(unlocated);
    ordered
}

/// Plan `days` days of activities in `city`, skipping anything priced above
/// `max_price_per_place`. Free activities are scheduled first.
#[must_use]
pub fn build_itinerary(
    pricing: &PricingTable,
    city: City,
    days: u32,
    max_price_per_place: f64,
) -> Itinerary {
    let days = days.max(1);

    let mut candidates: Vec<&Activity> = pricing
        .activities_in(city)
        .filter(|a| a.price_sgd <= max_price_per_place)
        .collect();
    // stable: keeps catalogue order within each group
    candidates.sort_by_key(|a| !a.is_free());

    let day_count = days as usize;
    let per_day = MAX_STOPS_PER_DAY.min(candidates.len().div_ceil(day_count));
    let selected = candidates.into_iter().take(day_count * per_day);

    let stops: Vec<ItineraryStop> = selected
        .map(|activity| ItineraryStop {
            maps_link: activity.maps_link(),
            activity: activity.clone(),
        })
        .collect();
    let total_budget = stops.iter().map(|s| s.activity.price_sgd).sum();

    let mut plan = Vec::with_capacity(day_count);
    let mut remaining = stops.into_iter();
    for day in 1..=days {
        let chunk: Vec<_> = remaining.by_ref().take(per_day).collect();
        if chunk.is_empty() {
            break;
        }
        plan.push(ItineraryDay {
            day,
            stops: order_by_proximity(chunk),
        });
    }

    Itinerary {
        city,
        days: plan,
        total_budget,
    }
}
