//! HTTP API tests against stubbed upstream providers

use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use japan_budget::{
    api::{AppState, router},
    attractions::{Attraction, AttractionCategory, AttractionProvider},
    config::ServerConfig,
    exchange_rate::FixedExchangeRate,
    models::City,
    pricing::PricingTable,
    weather::{CityForecast, DailyForecast, WeatherProvider},
};
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

struct SunnyWeather;

#[async_trait]
impl WeatherProvider for SunnyWeather {
    async fn forecast(&self, city: City) -> Result<CityForecast> {
        Ok(CityForecast {
            city,
            timezone: "Asia/Tokyo".to_string(),
            daily: vec![DailyForecast {
                date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                temperature_max: Some(24.0),
                temperature_min: Some(15.0),
                precipitation_probability: Some(10),
                weather_code: Some(0),
                description: "Clear sky",
            }],
        })
    }
}

struct WeatherOutage;

#[async_trait]
impl WeatherProvider for WeatherOutage {
    async fn forecast(&self, _city: City) -> Result<CityForecast> {
        Err(anyhow!("forecast service unavailable"))
    }
}

struct OneTemple;

#[async_trait]
impl AttractionProvider for OneTemple {
    async fn attractions(&self, _city: City) -> Result<Vec<Attraction>> {
        Ok(vec![Attraction {
            id: "node/1".to_string(),
            name: "Kiyomizu-dera".to_string(),
            kind: "place_of_worship".to_string(),
            lat: 34.9949,
            lon: 135.7850,
            category: AttractionCategory::Temple,
        }])
    }
}

fn state_with(weather: Arc<dyn WeatherProvider>) -> AppState {
    AppState {
        pricing: Arc::new(PricingTable::standard()),
        exchange_rates: Arc::new(FixedExchangeRate(0.01)),
        weather,
        attractions: Arc::new(OneTemple),
    }
}

fn app() -> Router {
    router(state_with(Arc::new(SunnyWeather)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: Router, uri: &str, payload: &Value) -> (StatusCode, Vec<u8>) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}

fn two_city_trip() -> Value {
    json!({
        "trip": {
            "departureDate": "2025-06-01",
            "returnDate": "2025-06-06",
            "travelers": 2,
            "cities": ["Tokyo", "Kyoto"],
            "travelStyle": "midrange"
        },
        "selection": {
            "destination": "Kyoto",
            "shoppingBudget": 150,
            "selectedActivities": ["skytree", "fushimi-inari"]
        }
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], japan_budget::VERSION);
}

#[tokio::test]
async fn test_full_app_serves_through_middleware() {
    let app = japan_budget::web::app(state_with(Arc::new(SunnyWeather)), &ServerConfig::default());
    let (status, body) = get_json(app.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = post(app, "/api/budget", &two_city_trip()).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["breakdown"]["flights"], 700.0);
}

#[tokio::test]
async fn test_exchange_rate_comes_from_provider() {
    let (status, body) = get_json(app(), "/exchange-rate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rate"], 0.01);
    assert!(body["lastUpdated"].is_string());
}

#[tokio::test]
async fn test_budget_breakdown() {
    let (status, body) = post(app(), "/budget", &two_city_trip()).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["nights"], 5);
    assert_eq!(body["season"], "regular");
    assert_eq!(body["flightRoute"], "Singapore (SIN) → Kyoto (KIX)");

    let breakdown = &body["breakdown"];
    // Kyoto budget fare
    assert_eq!(breakdown["flights"], 700.0);
    // (100 + 90) / 2 per night, one room, five nights
    assert_eq!(breakdown["accommodation"], 475.0);
    // skytree only; fushimi-inari is free
    assert_eq!(breakdown["activities"], 38.0);
    // (150 + 100) * 2 + eSIM
    assert_eq!(breakdown["shopping"], 525.0);

    let total = breakdown["total"].as_f64().unwrap();
    assert_eq!(breakdown["totalJPY"].as_i64(), Some((total / 0.01).round() as i64));
    assert_eq!(body["dailyProfile"].as_array().unwrap().len(), 5);
    assert_eq!(body["slices"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_selection_defaults_when_omitted() {
    let payload = json!({
        "trip": { "travelers": 1, "cities": ["Osaka"], "travelStyle": "budget" }
    });
    let (status, body) = post(app(), "/budget", &payload).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["nights"], 7);
    assert_eq!(body["flightRoute"], "Singapore (SIN) → Osaka (KIX)");
    assert_eq!(body["breakdown"]["flights"], 320.0);
}

#[rstest]
#[case(json!({ "travelers": 0, "cities": ["Tokyo"], "travelStyle": "midrange" }))]
#[case(json!({ "travelers": 21, "cities": ["Tokyo"], "travelStyle": "midrange" }))]
#[case(json!({ "travelers": 2, "cities": [], "travelStyle": "luxury" }))]
#[case(json!({
    "departureDate": "2025-06-10",
    "returnDate": "2025-06-01",
    "travelers": 2,
    "cities": ["Tokyo"],
    "travelStyle": "luxury"
}))]
#[tokio::test]
async fn test_invalid_trip_is_bad_request(#[case] trip: Value) {
    let (status, body) = post(app(), "/budget", &json!({ "trip": trip })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["kind"], "invalid_selection");
}

#[rstest]
#[case(json!({ "trip": { "travelers": 2, "cities": ["Paris"], "travelStyle": "midrange" } }))]
#[case(json!({ "trip": { "travelers": -1, "cities": ["Tokyo"], "travelStyle": "midrange" } }))]
#[case(json!({
    "trip": { "travelers": 2, "cities": ["Tokyo"], "travelStyle": "midrange" },
    "selection": { "accommodationType": "castle" }
}))]
#[case(json!({ "selection": {} }))]
#[tokio::test]
async fn test_malformed_body_is_json_bad_request(#[case] payload: Value) {
    let (status, body) = post(app(), "/budget", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["kind"], "invalid_selection");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_is_json_bad_request() {
    let request = Request::post("/budget")
        .body(Body::from(two_city_trip().to_string()))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["kind"], "invalid_selection");
}

#[tokio::test]
async fn test_daily_food_budget_is_clamped_to_tier() {
    let payload = json!({
        "trip": { "travelers": 1, "cities": ["Tokyo"], "travelStyle": "budget" },
        "selection": { "foodTier": "budget", "dailyFoodBudget": 5000 }
    });
    let (status, body) = post(app(), "/budget", &payload).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    // budget tier tops out at S$35 a day, seven nights
    assert_eq!(body["breakdown"]["food"], 245.0);
}

#[tokio::test]
async fn test_negative_shopping_budget_is_rejected() {
    let payload = json!({
        "trip": { "travelers": 1, "cities": ["Tokyo"], "travelStyle": "midrange" },
        "selection": { "shoppingBudget": -10 }
    });
    let (status, _) = post(app(), "/budget", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_renders_html() {
    let (status, body) = post(app(), "/budget/export", &two_city_trip()).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Singapore → Tokyo → Kyoto"));
    assert!(html.contains("2 people"));
    assert!(html.contains("1 SGD = ¥100"));
}

#[tokio::test]
async fn test_share_text() {
    let (status, body) = post(app(), "/budget/share", &two_city_trip()).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();

    let text = body["text"].as_str().unwrap();
    assert!(text.starts_with("Planning a 5-day Japan trip!"));
    assert!(text.ends_with("Visiting: Tokyo, Kyoto."));
}

#[tokio::test]
async fn test_activities_for_city() {
    let (status, body) = get_json(app(), "/activities/osaka").await;
    assert_eq!(status, StatusCode::OK);
    let activities = body.as_array().unwrap();
    assert!(!activities.is_empty());
    assert!(activities.iter().all(|a| a["city"] == "Osaka"));
}

#[tokio::test]
async fn test_unknown_city_is_bad_request() {
    let (status, body) = get_json(app(), "/activities/Atlantis").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_selection");
}

#[tokio::test]
async fn test_itinerary_respects_budget_and_days() {
    let (status, body) = get_json(app(), "/itinerary/Tokyo?days=2&max_budget=20").await;
    assert_eq!(status, StatusCode::OK);

    let days = body["days"].as_array().unwrap();
    assert!(days.len() <= 2);
    for day in days {
        for stop in day["stops"].as_array().unwrap() {
            assert!(stop["priceSGD"].as_f64().unwrap() <= 20.0);
            assert!(stop["mapsLink"].as_str().unwrap().starts_with("https://www.google.com/maps"));
        }
    }
}

#[rstest]
#[case("/itinerary/Tokyo?days=0")]
#[case("/itinerary/Tokyo?days=31")]
#[case("/itinerary/Tokyo?max_budget=-5")]
#[case("/itinerary/Tokyo?days=abc")]
#[tokio::test]
async fn test_itinerary_rejects_bad_params(#[case] uri: &str) {
    let (status, body) = get_json(app(), uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_selection");
}

#[tokio::test]
async fn test_weather_forecast() {
    let (status, body) = get_json(app(), "/weather/Sapporo").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_selection");

    let (status, body) = get_json(app(), "/weather/Hokkaido").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Hokkaido");
    assert_eq!(body["daily"][0]["description"], "Clear sky");
}

#[tokio::test]
async fn test_weather_outage_is_bad_gateway() {
    let app = router(state_with(Arc::new(WeatherOutage)));
    let (status, body) = get_json(app, "/weather/Tokyo").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "api");
}

#[tokio::test]
async fn test_attractions() {
    let (status, body) = get_json(app(), "/attractions/Kyoto").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "OpenStreetMap");
    assert_eq!(body["attractions"][0]["type"], "place_of_worship");
    assert_eq!(body["attractions"][0]["category"], "temple");
}

#[tokio::test]
async fn test_tips_default_to_midrange() {
    let (status, body) = get_json(app(), "/tips").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["style"], "midrange");
    assert_eq!(body["tips"].as_array().unwrap().len(), 8);
    assert_eq!(body["general"].as_array().unwrap().len(), 8);
    assert_eq!(body["carRental"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_luxury_tips_skip_budget_advice() {
    let (status, body) = get_json(app(), "/tips?style=luxury").await;
    assert_eq!(status, StatusCode::OK);
    let tips = body["tips"].as_array().unwrap();
    assert_eq!(tips.len(), 3);
    assert!(
        tips.iter()
            .all(|tip| tip["category"] == "Transport" || tip["category"] == "Shopping")
    );

    let (status, body) = get_json(app(), "/tips?style=backpacker").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_selection");
}

#[tokio::test]
async fn test_city_recommendations() {
    let (status, body) = get_json(app(), "/recommendations/kyoto").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Kyoto");
    assert!(
        body["mustSee"]
            .as_array()
            .unwrap()
            .iter()
            .any(|spot| spot == "Fushimi Inari Shrine")
    );
    assert!(!body["hiddenGems"].as_array().unwrap().is_empty());

    let (status, body) = get_json(app(), "/recommendations/Atlantis").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_selection");
}
