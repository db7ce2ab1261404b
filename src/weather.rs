use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use crate::cache::TtlCache;
use crate::config::WeatherConfig;
use crate::http::API_CLIENT;
use crate::models::City;

/// One day of forecast for a city
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Celsius
    pub temperature_max: Option<f32>,
    pub temperature_min: Option<f32>,
    /// Percent chance of rain
    pub precipitation_probability: Option<u8>,
    pub weather_code: Option<u8>,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityForecast {
    pub city: City,
    pub timezone: String,
    pub daily: Vec<DailyForecast>,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn forecast(&self, city: City) -> Result<CityForecast>;
}

pub struct OpenMeteoWeather {
    base_url: String,
    forecast_days: u32,
    cache: TtlCache<City, CityForecast>,
}

impl OpenMeteoWeather {
    #[must_use]
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            forecast_days: config.forecast_days,
            cache: TtlCache::new(config.cache_ttl()),
        }
    }

    fn forecast_url(&self, city: City) -> String {
        let centre = city.centre();
        format!(
            "{}/forecast?latitude={}&longitude={}&daily=temperature_2m_max,temperature_2m_min,precipitation_probability_max,weather_code&timezone=Asia/Tokyo&forecast_days={}",
            self.base_url, centre.latitude, centre.longitude, self.forecast_days
        )
    }

    async fn fetch(&self, city: City) -> Result<CityForecast> {
        tracing::debug!("Calling the weather API");
        let response = API_CLIENT
            .get(self.forecast_url(city))
            .timeout(Duration::from_secs(15))
            .send()
            .await
            .with_context(|| format!("Weather request for {city} failed"))?
            .error_for_status()?;
        let body: openmeteo::ForecastResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse OpenMeteo forecast response")?;
        Ok(body.into_city_forecast(city))
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoWeather {
    #[instrument(skip(self))]
    async fn forecast(&self, city: City) -> Result<CityForecast> {
        self.cache.get_or_fetch(city, || self.fetch(city)).await
    }
}

/// `OpenMeteo` API response structures and conversion utilities
mod openmeteo {
    use super::{City, CityForecast, DailyForecast};
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        #[serde(default)]
        pub timezone: String,
        pub daily: Option<DailyData>,
    }

    /// Daily weather data from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Vec<String>,
        #[serde(rename = "temperature_2m_max")]
        pub temperature_max: Option<Vec<Option<f32>>>,
        #[serde(rename = "temperature_2m_min")]
        pub temperature_min: Option<Vec<Option<f32>>>,
        #[serde(rename = "precipitation_probability_max")]
        pub precipitation_probability: Option<Vec<Option<u8>>>,
        pub weather_code: Option<Vec<Option<u8>>>,
    }

    fn pick<T: Copy>(series: Option<&Vec<Option<T>>>, i: usize) -> Option<T> {
        series.and_then(|values| values.get(i).copied().flatten())
    }

    impl ForecastResponse {
        pub fn into_city_forecast(self, city: City) -> CityForecast {
            let daily = self
                .daily
                .map(|data| {
                    data.time
                        .iter()
                        .enumerate()
                        .filter_map(|(i, day)| {
                            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
                            let weather_code = pick(data.weather_code.as_ref(), i);
                            Some(DailyForecast {
                                date,
                                temperature_max: pick(data.temperature_max.as_ref(), i),
                                temperature_min: pick(data.temperature_min.as_ref(), i),
                                precipitation_probability: pick(
                                    data.precipitation_probability.as_ref(),
                                    i,
                                ),
                                weather_code,
                                description: weather_code
                                    .map_or("Unknown", weather_code_to_description),
                            })
                        })
                        .collect()
                })
                .unwrap_or_default();

            CityForecast {
                city,
                timezone: self.timezone,
                daily,
            }
        }
    }

    /// Convert `OpenMeteo` weather code to human-readable description
    #[must_use]
    pub fn weather_code_to_description(code: u8) -> &'static str {
        match code {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Fog",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            56 => "Light freezing drizzle",
            57 => "Dense freezing drizzle",
            61 => "Slight rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            66 => "Light freezing rain",
            67 => "Heavy freezing rain",
            71 => "Slight snow fall",
            73 => "Moderate snow fall",
            75 => "Heavy snow fall",
            77 => "Snow grains",
            80 => "Slight rain showers",
            81 => "Moderate rain showers",
            82 => "Violent rain showers",
            85 => "Slight snow showers",
            86 => "Heavy snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with slight hail",
            99 => "Thunderstorm with heavy hail",
            _ => "Unknown",
        }
    }
}

pub use openmeteo::weather_code_to_description;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "latitude": 35.7,
        "longitude": 139.6,
        "timezone": "Asia/Tokyo",
        "daily": {
            "time": ["2025-04-01", "2025-04-02", "not-a-date"],
            "temperature_2m_max": [18.2, null, 20.0],
            "temperature_2m_min": [9.1, 10.4, 11.0],
            "precipitation_probability_max": [10, 80, 0],
            "weather_code": [1, 63, 0]
        }
    }"#;

    #[test]
    fn test_parse_daily_forecast() {
        let response: openmeteo::ForecastResponse = serde_json::from_str(SAMPLE).unwrap();
        let forecast = response.into_city_forecast(City::Tokyo);

        assert_eq!(forecast.timezone, "Asia/Tokyo");
        assert_eq!(forecast.daily.len(), 2);
        assert_eq!(forecast.daily[0].temperature_max, Some(18.2));
        assert_eq!(forecast.daily[0].description, "Mainly clear");
        assert_eq!(forecast.daily[1].temperature_max, None);
        assert_eq!(forecast.daily[1].precipitation_probability, Some(80));
        assert_eq!(forecast.daily[1].description, "Moderate rain");
    }

    #[test]
    fn test_missing_daily_block() {
        let response: openmeteo::ForecastResponse =
            serde_json::from_str(r#"{"timezone":"Asia/Tokyo"}"#).unwrap();
        assert!(response.into_city_forecast(City::Nara).daily.is_empty());
    }

    #[test]
    fn test_forecast_url_uses_city_centre() {
        let provider = OpenMeteoWeather::new(&WeatherConfig::default());
        let url = provider.forecast_url(City::Kyoto);
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?latitude=35.0116&longitude=135.7681"));
        assert!(url.contains("timezone=Asia/Tokyo"));
        assert!(url.ends_with("forecast_days=14"));
    }

    #[test]
    fn test_weather_codes() {
        assert_eq!(weather_code_to_description(0), "Clear sky");
        assert_eq!(weather_code_to_description(95), "Thunderstorm");
        assert_eq!(weather_code_to_description(42), "Unknown");
    }
}
