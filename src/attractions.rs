//! OpenStreetMap attraction discovery through the Overpass API

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::cache::TtlCache;
use crate::config::AttractionsConfig;
use crate::http::API_CLIENT;
use crate::models::{City, GeoPoint};

named_enum! {
    /// Coarse grouping derived from OSM tags
    pub enum AttractionCategory {
        Museum => "museum",
        ThemePark => "theme_park",
        Temple => "temple",
        Viewpoint => "viewpoint",
        Landmark => "landmark",
        Nature => "nature",
        Experience => "experience",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    /// Raw OSM tag value the category was derived from
    #[serde(rename = "type")]
    pub kind: String,
    pub lat: f64,
    pub lon: f64,
    pub category: AttractionCategory,
}

impl Attraction {
    #[must_use]
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

#[async_trait]
pub trait AttractionProvider: Send + Sync {
    async fn attractions(&self, city: City) -> Result<Vec<Attraction>>;
}

/// Overpass QL for tourist nodes and ways within `radius_m` of `centre`
#[must_use]
pub fn overpass_query(centre: GeoPoint, radius_m: u32) -> String {
    let around = format!("around:{},{},{}", radius_m, centre.latitude, centre.longitude);
    format!(
        r#"[out:json][timeout:30];
(
  node["tourism"~"attraction|museum|viewpoint|theme_park|artwork|gallery|zoo"]({around});
  node["historic"~"castle|monument|memorial|shrine|temple"]({around});
  node["leisure"~"park|garden|water_park"]({around});
  way["tourism"~"attraction|museum|viewpoint|theme_park|zoo"]({around});
  way["historic"~"castle"]({around});
);
out body center 50;"#
    )
}

/// Map OSM tags to a category; the first matching rule wins
#[must_use]
pub fn categorize(tags: &HashMap<String, String>) -> AttractionCategory {
    let tag = |key: &str| tags.get(key).map(String::as_str);

    match (tag("tourism"), tag("historic"), tag("leisure")) {
        (Some("museum" | "gallery"), _, _) => AttractionCategory::Museum,
        (Some("theme_park"), _, _) | (_, _, Some("water_park")) => AttractionCategory::ThemePark,
        (_, Some("shrine" | "temple"), _) => AttractionCategory::Temple,
        (Some("viewpoint"), _, _) => AttractionCategory::Viewpoint,
        (_, Some("castle" | "monument"), _) => AttractionCategory::Landmark,
        (_, _, Some("park" | "garden")) => AttractionCategory::Nature,
        _ => AttractionCategory::Experience,
    }
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    id: u64,
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<OverpassCenter>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: f64,
    lon: f64,
}

impl OverpassElement {
    /// Named elements with a position; everything else is dropped
    fn into_attraction(self) -> Option<Attraction> {
        let name = self
            .tags
            .get("name")
            .or_else(|| self.tags.get("name:en"))?
            .clone();
        let (lat, lon) = match (self.lat, self.lon, &self.center) {
            (Some(lat), Some(lon), _) => (lat, lon),
            (_, _, Some(center)) => (center.lat, center.lon),
            _ => return None,
        };
        let kind = ["tourism", "historic", "leisure"]
            .iter()
            .find_map(|key| self.tags.get(*key))
            .cloned()
            .unwrap_or_else(|| "attraction".to_string());

        Some(Attraction {
            id: format!("osm-{}", self.id),
            category: categorize(&self.tags),
            name,
            kind,
            lat,
            lon,
        })
    }
}

fn parse_attractions(body: OverpassResponse) -> Vec<Attraction> {
    body.elements
        .into_iter()
        .filter_map(OverpassElement::into_attraction)
        .collect()
}

pub struct OverpassAttractions {
    overpass_url: String,
    cache: TtlCache<City, Vec<Attraction>>,
}

impl OverpassAttractions {
    #[must_use]
    pub fn new(config: &AttractionsConfig) -> Self {
        Self {
            overpass_url: config.overpass_url.clone(),
            cache: TtlCache::new(config.cache_ttl()),
        }
    }

    async fn fetch(&self, city: City) -> Result<Vec<Attraction>> {
        tracing::debug!("Calling the Overpass API");
        let query = overpass_query(city.centre(), city.search_radius_m());
        let response = API_CLIENT
            .post(&self.overpass_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!("data={}", urlencoding::encode(&query)))
            .timeout(Duration::from_secs(40))
            .send()
            .await
            .with_context(|| format!("Overpass request for {city} failed"))?
            .error_for_status()?;
        let body: OverpassResponse = response
            .json()
            .await
            .context("Failed to parse Overpass response")?;
        Ok(parse_attractions(body))
    }
}

#[async_trait]
impl AttractionProvider for OverpassAttractions {
    /// Serves stale data when a refresh fails, and an empty list when
    /// nothing was ever fetched.
    #[instrument(skip(self))]
    async fn attractions(&self, city: City) -> Result<Vec<Attraction>> {
        match self.cache.get_or_fetch(city, || self.fetch(city)).await {
            Ok(found) => Ok(found),
            Err(err) => {
                warn!("Attraction lookup failed, serving cached data: {err:#}");
                Ok(self.cache.get_stale(&city).await.unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[rstest]
    #[case(&[("tourism", "museum")], AttractionCategory::Museum)]
    #[case(&[("tourism", "gallery")], AttractionCategory::Museum)]
    #[case(&[("tourism", "theme_park")], AttractionCategory::ThemePark)]
    #[case(&[("leisure", "water_park")], AttractionCategory::ThemePark)]
    #[case(&[("historic", "shrine")], AttractionCategory::Temple)]
    #[case(&[("historic", "temple")], AttractionCategory::Temple)]
    #[case(&[("tourism", "viewpoint")], AttractionCategory::Viewpoint)]
    #[case(&[("historic", "castle")], AttractionCategory::Landmark)]
    #[case(&[("historic", "monument")], AttractionCategory::Landmark)]
    #[case(&[("leisure", "park")], AttractionCategory::Nature)]
    #[case(&[("leisure", "garden")], AttractionCategory::Nature)]
    #[case(&[("tourism", "zoo")], AttractionCategory::Experience)]
    #[case(&[("tourism", "museum"), ("historic", "castle")], AttractionCategory::Museum)]
    fn test_categorize(#[case] pairs: &[(&str, &str)], #[case] expected: AttractionCategory) {
        assert_eq!(categorize(&tags(pairs)), expected);
    }

    #[test]
    fn test_parse_elements() {
        let body: OverpassResponse = serde_json::from_str(
            r#"{"elements": [
                {"type":"node","id":1,"lat":35.0,"lon":135.7,"tags":{"name":"Kinkaku-ji","historic":"temple"}},
                {"type":"way","id":2,"center":{"lat":35.01,"lon":135.74},"tags":{"name:en":"Nijo Castle","historic":"castle"}},
                {"type":"node","id":3,"lat":35.0,"lon":135.7,"tags":{"tourism":"artwork"}},
                {"type":"way","id":4,"tags":{"name":"Nowhere","tourism":"museum"}}
            ]}"#,
        )
        .unwrap();
        let found = parse_attractions(body);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, "osm-1");
        assert_eq!(found[0].category, AttractionCategory::Temple);
        assert_eq!(found[0].kind, "temple");
        assert_eq!(found[1].name, "Nijo Castle");
        assert_eq!(found[1].lat, 35.01);
        assert_eq!(found[1].category, AttractionCategory::Landmark);
    }

    #[test]
    fn test_overpass_query() {
        let query = overpass_query(City::Hokkaido.centre(), City::Hokkaido.search_radius_m());
        assert!(query.starts_with("[out:json][timeout:30];"));
        assert!(query.contains("around:50000,43.0618,141.3545"));
        assert!(query.ends_with("out body center 50;"));
    }

    #[tokio::test]
    async fn test_failed_lookup_without_cache_is_empty() {
        let provider = OverpassAttractions::new(&AttractionsConfig {
            overpass_url: "http://127.0.0.1:9/api/interpreter".to_string(),
            cache_ttl_hours: 1,
        });
        let found = provider.attractions(City::Nara).await.unwrap();
        assert!(found.is_empty());
    }
}
