//! Live SGD/JPY exchange rate with caching and a fixed fallback

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::cache::TtlCache;
use crate::config::ExchangeRateConfig;
use crate::http::API_CLIENT;

/// SGD per JPY at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub rate: f64,
    pub last_updated: DateTime<Utc>,
}

impl ExchangeRate {
    #[must_use]
    pub fn fallback(rate: f64) -> Self {
        Self {
            rate,
            last_updated: Utc::now(),
        }
    }
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Current rate; never fails, degrading to a default instead
    async fn current_rate(&self) -> ExchangeRate;
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: std::collections::HashMap<String, f64>,
}

/// Converts a JPY-per-SGD quote into SGD per JPY
fn sgd_per_jpy(jpy_per_sgd: f64) -> Result<f64> {
    if jpy_per_sgd > 0.0 && jpy_per_sgd.is_finite() {
        Ok(1.0 / jpy_per_sgd)
    } else {
        Err(anyhow!("Invalid JPY quote: {jpy_per_sgd}"))
    }
}

pub struct LiveExchangeRates {
    api_url: String,
    timeout: Duration,
    default_rate: f64,
    cache: TtlCache<&'static str, ExchangeRate>,
}

impl LiveExchangeRates {
    #[must_use]
    pub fn new(config: &ExchangeRateConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            default_rate: config.default_rate,
            cache: TtlCache::new(config.cache_ttl()),
        }
    }

    async fn fetch(&self) -> Result<ExchangeRate> {
        tracing::debug!("Calling the exchange rate API");
        let response = API_CLIENT
            .get(&self.api_url)
            .timeout(self.timeout)
            .send()
            .await
            .context("Exchange rate request failed")?
            .error_for_status()
            .context("Exchange rate API returned an error status")?;
        let body: RatesResponse = response
            .json()
            .await
            .context("Failed to parse exchange rate response")?;
        let jpy = body
            .rates
            .get("JPY")
            .copied()
            .ok_or(anyhow!("No JPY rate in response"))?;

        Ok(ExchangeRate {
            rate: sgd_per_jpy(jpy)?,
            last_updated: Utc::now(),
        })
    }
}

#[async_trait]
impl ExchangeRateProvider for LiveExchangeRates {
    #[instrument(skip(self))]
    async fn current_rate(&self) -> ExchangeRate {
        match self.cache.get_or_fetch("SGD/JPY", || self.fetch()).await {
            Ok(rate) => rate,
            Err(err) => {
                warn!("Using default exchange rate: {err:#}");
                ExchangeRate::fallback(self.default_rate)
            }
        }
    }
}

/// Fixed rate, for offline use and tests
pub struct FixedExchangeRate(pub f64);

#[async_trait]
impl ExchangeRateProvider for FixedExchangeRate {
    async fn current_rate(&self) -> ExchangeRate {
        ExchangeRate::fallback(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgd_per_jpy() {
        let rate = sgd_per_jpy(112.36).unwrap();
        assert!((rate - 0.0089).abs() < 0.0001);
        assert!(sgd_per_jpy(0.0).is_err());
        assert!(sgd_per_jpy(f64::NAN).is_err());
    }

    #[test]
    fn test_rates_response_parsing() {
        let body: RatesResponse =
            serde_json::from_str(r#"{"base":"SGD","rates":{"JPY":112.5,"USD":0.74}}"#).unwrap();
        assert_eq!(body.rates.get("JPY"), Some(&112.5));
    }

    #[test]
    fn test_rate_serializes_camel_case() {
        let json = serde_json::to_value(ExchangeRate::fallback(0.0089)).unwrap();
        assert_eq!(json["rate"], 0.0089);
        assert!(json["lastUpdated"].is_string());
    }

    #[tokio::test]
    async fn test_unreachable_api_falls_back_to_default() {
        let config = ExchangeRateConfig {
            api_url: "http://127.0.0.1:9/latest/SGD".to_string(),
            timeout_seconds: 1,
            ..ExchangeRateConfig::default()
        };
        let provider = LiveExchangeRates::new(&config);
        let rate = provider.current_rate().await;
        assert_eq!(rate.rate, config.default_rate);
    }

    #[tokio::test]
    async fn test_fixed_rate() {
        assert_eq!(FixedExchangeRate(0.01).current_rate().await.rate, 0.01);
    }
}
