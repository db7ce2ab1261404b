//! JSON API served under `/api`

use std::sync::Arc;

use axum::{
    Router,
    extract::{
        FromRequest, FromRequestParts, Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::{
    BudgetError,
    attractions::{Attraction, AttractionProvider, OverpassAttractions},
    calculator::compute_breakdown,
    config::BudgetConfig,
    exchange_rate::{ExchangeRate, ExchangeRateProvider, LiveExchangeRates},
    export::{render_html_summary, share_text},
    itinerary::{Itinerary, build_itinerary},
    models::{
        BudgetEvent, City, CostBreakdown, DailyCost, SelectionState, Slice, TravelStyle,
        TripConfig,
    },
    pricing::{Activity, PricingTable, load_pricing},
    season::Season,
    tips::{CAR_RENTAL_TIPS, CityGuide, GENERAL_TIPS, GeneralTip, SavingTip, city_guide, travel_tips},
    weather::{CityForecast, OpenMeteoWeather, WeatherProvider},
};

/// Shared handles for every request
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingTable>,
    pub exchange_rates: Arc<dyn ExchangeRateProvider>,
    pub weather: Arc<dyn WeatherProvider>,
    pub attractions: Arc<dyn AttractionProvider>,
}

impl AppState {
    /// State backed by the live upstream services
    pub fn live(config: &BudgetConfig) -> anyhow::Result<Self> {
        Ok(Self {
            pricing: Arc::new(load_pricing(&config.pricing)?),
            exchange_rates: Arc::new(LiveExchangeRates::new(&config.exchange_rate)),
            weather: Arc::new(OpenMeteoWeather::new(&config.weather)),
            attractions: Arc::new(OverpassAttractions::new(&config.attractions)),
        })
    }
}

/// Error body returned by every failing handler
pub struct ApiError(BudgetError);

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        Self(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<BudgetError>() {
            Ok(budget_err) => Self(budget_err),
            Err(other) => Self(BudgetError::api(format!("{other:#}"))),
        }
    }
}

// Malformed bodies and query strings share the JSON error shape instead of
// axum's plain-text 4xx rejections.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(BudgetError::invalid_selection(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(BudgetError::invalid_selection(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BudgetError::InvalidSelection { .. } => StatusCode::BAD_REQUEST,
            BudgetError::Api { .. } => StatusCode::BAD_GATEWAY,
            BudgetError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }
        let body = Json(json!({
            "error": self.0.user_message(),
            "kind": self.0.kind(),
        }));
        (status, body).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// `Json` extractor that rejects with [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor that rejects with [`ApiError`]
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, Deserialize)]
pub struct BudgetRequest {
    pub trip: TripConfig,
    #[serde(default)]
    pub selection: SelectionState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResponse {
    pub breakdown: CostBreakdown,
    pub nights: u32,
    pub season: Season,
    pub season_multiplier: f64,
    pub exchange_rate: ExchangeRate,
    pub flight_route: String,
    pub slices: Vec<Slice>,
    pub daily_profile: Vec<DailyCost>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct AttractionsResponse {
    city: City,
    attractions: Vec<Attraction>,
    source: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ItineraryParams {
    #[serde(default = "default_itinerary_days")]
    pub days: u32,
    #[serde(default = "default_max_budget")]
    pub max_budget: f64,
}

#[derive(Debug, Deserialize)]
pub struct TipsParams {
    pub style: Option<TravelStyle>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TipsResponse {
    style: TravelStyle,
    tips: Vec<SavingTip>,
    general: &'static [GeneralTip],
    car_rental: &'static [&'static str],
}

fn default_itinerary_days() -> u32 {
    3
}

fn default_max_budget() -> f64 {
    100.0
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/exchange-rate", get(get_exchange_rate))
        .route("/pricing", get(get_pricing))
        .route("/activities/{city}", get(get_activities))
        .route("/budget", post(calculate_budget))
        .route("/budget/export", post(export_budget))
        .route("/budget/share", post(share_budget))
        .route("/weather/{city}", get(get_weather))
        .route("/attractions/{city}", get(get_attractions))
        .route("/itinerary/{city}", get(get_itinerary))
        .route("/tips", get(get_tips))
        .route("/recommendations/{city}", get(get_recommendations))
        .with_state(state)
}

fn parse_city(raw: &str) -> ApiResult<City> {
    Ok(raw.parse::<City>()?)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
        timestamp: Utc::now(),
    })
}

async fn get_exchange_rate(State(state): State<AppState>) -> Json<ExchangeRate> {
    Json(state.exchange_rates.current_rate().await)
}

async fn get_pricing(State(state): State<AppState>) -> Json<PricingTable> {
    Json(state.pricing.as_ref().clone())
}

async fn get_activities(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> ApiResult<Json<Vec<Activity>>> {
    let city = parse_city(&city)?;
    Ok(Json(state.pricing.activities_in(city).cloned().collect()))
}

/// Validate the request and compute its breakdown against the live rate
async fn evaluate(
    state: &AppState,
    request: BudgetRequest,
) -> ApiResult<(TripConfig, CostBreakdown, ExchangeRate)> {
    let BudgetRequest {
        trip,
        mut selection,
    } = request;
    trip.validate()?;
    selection.validate()?;
    selection.normalize(&trip.cities, &state.pricing);

    let rate = state.exchange_rates.current_rate().await;
    let breakdown = compute_breakdown(&trip, &selection, &state.pricing, rate.rate);
    Ok((trip, breakdown, rate))
}

async fn calculate_budget(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BudgetRequest>,
) -> ApiResult<Json<BudgetResponse>> {
    let destination = request.selection.effective_destination(&request.trip.cities);
    let (trip, breakdown, rate) = evaluate(&state, request).await?;
    BudgetEvent::new(&trip, &breakdown, rate.rate).emit();

    let nights = trip.nights();
    let season = trip.season();
    Ok(Json(BudgetResponse {
        breakdown,
        nights,
        season,
        season_multiplier: season.multiplier(),
        exchange_rate: rate,
        flight_route: destination.flight_route(),
        slices: breakdown.slices(),
        daily_profile: breakdown.daily_profile(nights),
    }))
}

async fn export_budget(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BudgetRequest>,
) -> ApiResult<Html<String>> {
    let (trip, breakdown, rate) = evaluate(&state, request).await?;
    Ok(Html(render_html_summary(&trip, &breakdown, rate.rate)))
}

async fn share_budget(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BudgetRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let (trip, breakdown, _) = evaluate(&state, request).await?;
    Ok(Json(json!({
        "title": "Japan Trip Budget",
        "text": share_text(&trip, &breakdown),
    })))
}

async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> ApiResult<Json<CityForecast>> {
    let city = parse_city(&city)?;
    Ok(Json(state.weather.forecast(city).await?))
}

async fn get_attractions(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> ApiResult<Json<AttractionsResponse>> {
    let city = parse_city(&city)?;
    let attractions = state.attractions.attractions(city).await?;
    Ok(Json(AttractionsResponse {
        city,
        attractions,
        source: "OpenStreetMap",
    }))
}

async fn get_itinerary(
    State(state): State<AppState>,
    Path(city): Path<String>,
    ApiQuery(params): ApiQuery<ItineraryParams>,
) -> ApiResult<Json<Itinerary>> {
    let city = parse_city(&city)?;
    if params.days == 0 || params.days > 30 {
        return Err(BudgetError::invalid_selection("days must be between 1 and 30").into());
    }
    if !params.max_budget.is_finite() || params.max_budget < 0.0 {
        return Err(BudgetError::invalid_selection("max_budget must be non-negative").into());
    }
    Ok(Json(build_itinerary(
        &state.pricing,
        city,
        params.days,
        params.max_budget,
    )))
}

async fn get_tips(ApiQuery(params): ApiQuery<TipsParams>) -> Json<TipsResponse> {
    let style = params.style.unwrap_or(TravelStyle::Midrange);
    Json(TipsResponse {
        style,
        tips: travel_tips(style),
        general: GENERAL_TIPS,
        car_rental: CAR_RENTAL_TIPS,
    })
}

async fn get_recommendations(Path(city): Path<String>) -> ApiResult<Json<CityGuide>> {
    let city = parse_city(&city)?;
    Ok(Json(city_guide(city)))
}
