//! Curated activity catalogue

use serde::{Deserialize, Serialize};

use crate::models::{ActivityCategory, City, GeoPoint};

/// A bookable or free activity with a per-person entry price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub city: City,
    #[serde(rename = "priceJPY")]
    pub price_jpy: f64,
    #[serde(rename = "priceSGD")]
    pub price_sgd: f64,
    pub category: ActivityCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    /// Only available part of the year (e.g. ski passes)
    #[serde(default)]
    pub seasonal: bool,
}

impl Activity {
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price_sgd <= 0.0
    }

    /// Google Maps search link, by coordinates when known
    #[must_use]
    pub fn maps_link(&self) -> String {
        match &self.location {
            Some(point) => format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                point.format_query()
            ),
            None => format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                urlencoding::encode(&format!("{} {} Japan", self.name, self.city))
            ),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn curated(
    id: &str,
    name: &str,
    city: City,
    price_jpy: u32,
    price_sgd: u32,
    category: ActivityCategory,
    latitude: f64,
    longitude: f64,
) -> Activity {
    Activity {
        id: id.to_string(),
        name: name.to_string(),
        city,
        price_jpy: f64::from(price_jpy),
        price_sgd: f64::from(price_sgd),
        category,
        location: Some(GeoPoint::new(latitude, longitude)),
        seasonal: false,
    }
}

#[allow(clippy::too_many_arguments)]
fn seasonal(
    id: &str,
    name: &str,
    city: City,
    price_jpy: u32,
    price_sgd: u32,
    category: ActivityCategory,
    latitude: f64,
    longitude: f64,
) -> Activity {
    Activity {
        seasonal: true,
        ..curated(id, name, city, price_jpy, price_sgd, category, latitude, longitude)
    }
}

/// The built-in activity list
#[must_use]
pub fn default_activities() -> Vec<Activity> {
    vec![
        curated("teamlab-planets", "TeamLab Planets", City::Tokyo, 3800, 34, ActivityCategory::Museum, 35.6426, 139.7836),
        curated("teamlab-borderless", "TeamLab Borderless", City::Tokyo, 3800, 34, ActivityCategory::Museum, 35.6256, 139.7785),
        curated("disney-sea", "Tokyo DisneySea", City::Tokyo, 9400, 84, ActivityCategory::ThemePark, 35.6267, 139.8850),
        curated("disneyland", "Tokyo Disneyland", City::Tokyo, 9400, 84, ActivityCategory::ThemePark, 35.6329, 139.8804),
        curated("skytree", "Tokyo Skytree", City::Tokyo, 2100, 19, ActivityCategory::Experience, 35.7101, 139.8107),
        curated("senso-ji", "Senso-ji Temple", City::Tokyo, 0, 0, ActivityCategory::Temple, 35.7148, 139.7967),
        curated("meiji-shrine", "Meiji Shrine", City::Tokyo, 0, 0, ActivityCategory::Temple, 35.6764, 139.6993),
        curated("tokyo-tower", "Tokyo Tower", City::Tokyo, 1200, 11, ActivityCategory::Experience, 35.6586, 139.7454),
        curated("shibuya-sky", "Shibuya Sky", City::Tokyo, 2200, 20, ActivityCategory::Experience, 35.6580, 139.7016),
        curated("national-museum", "Tokyo National Museum", City::Tokyo, 1000, 9, ActivityCategory::Museum, 35.7189, 139.7765),
        curated("ueno-zoo", "Ueno Zoo", City::Tokyo, 600, 5, ActivityCategory::Experience, 35.7163, 139.7714),
        curated("shinjuku-gyoen", "Shinjuku Gyoen Garden", City::Tokyo, 500, 4, ActivityCategory::Experience, 35.6852, 139.7100),
        curated("sanrio-puroland", "Sanrio Puroland", City::Tokyo, 3600, 32, ActivityCategory::ThemePark, 35.6254, 139.4287),
        curated("robot-restaurant", "Robot Restaurant Show", City::Tokyo, 8500, 76, ActivityCategory::Experience, 35.6940, 139.7036),
        curated("usj", "Universal Studios Japan", City::Osaka, 9500, 85, ActivityCategory::ThemePark, 34.6656, 135.4323),
        curated("osaka-castle", "Osaka Castle", City::Osaka, 600, 5, ActivityCategory::Museum, 34.6873, 135.5262),
        curated("dotonbori", "Dotonbori Food Tour", City::Osaka, 0, 0, ActivityCategory::Experience, 34.6687, 135.5011),
        curated("osaka-aquarium", "Osaka Aquarium Kaiyukan", City::Osaka, 2700, 24, ActivityCategory::Museum, 34.6545, 135.4290),
        curated("umeda-sky", "Umeda Sky Building", City::Osaka, 1500, 13, ActivityCategory::Experience, 34.7052, 135.4906),
        curated("shinsekai", "Shinsekai District Tour", City::Osaka, 0, 0, ActivityCategory::Experience, 34.6522, 135.5062),
        curated("sumiyoshi-taisha", "Sumiyoshi Taisha Shrine", City::Osaka, 0, 0, ActivityCategory::Temple, 34.6118, 135.4928),
        curated("fushimi-inari", "Fushimi Inari Shrine", City::Kyoto, 0, 0, ActivityCategory::Temple, 34.9671, 135.7727),
        curated("kinkaku-ji", "Kinkaku-ji (Golden Pavilion)", City::Kyoto, 500, 4, ActivityCategory::Temple, 35.0394, 135.7292),
        curated("arashiyama", "Arashiyama Bamboo Grove", City::Kyoto, 0, 0, ActivityCategory::Experience, 35.0094, 135.6722),
        curated("gion", "Gion District Walking Tour", City::Kyoto, 0, 0, ActivityCategory::Experience, 35.0036, 135.7756),
        curated("nijo-castle", "Nijo Castle", City::Kyoto, 800, 7, ActivityCategory::Museum, 35.0142, 135.7481),
        curated("kiyomizu-dera", "Kiyomizu-dera Temple", City::Kyoto, 400, 4, ActivityCategory::Temple, 34.9949, 135.7850),
        curated("ginkaku-ji", "Ginkaku-ji (Silver Pavilion)", City::Kyoto, 500, 4, ActivityCategory::Temple, 35.0270, 135.7982),
        curated("ryoan-ji", "Ryoan-ji Zen Garden", City::Kyoto, 600, 5, ActivityCategory::Temple, 35.0345, 135.7184),
        curated("philosopher-path", "Philosopher's Path Walk", City::Kyoto, 0, 0, ActivityCategory::Experience, 35.0233, 135.7944),
        curated("nishiki-market", "Nishiki Market Food Tour", City::Kyoto, 0, 0, ActivityCategory::Experience, 35.0050, 135.7649),
        seasonal("niseko-ski", "Niseko Ski Pass (1 day)", City::Hokkaido, 7500, 67, ActivityCategory::Experience, 42.8048, 140.6874),
        curated("otaru", "Otaru Day Trip", City::Hokkaido, 0, 0, ActivityCategory::DayTrip, 43.1907, 140.9947),
        curated("shiroi-koibito", "Shiroi Koibito Park", City::Hokkaido, 800, 7, ActivityCategory::Museum, 43.1056, 141.2583),
        curated("sapporo-beer", "Sapporo Beer Museum", City::Hokkaido, 500, 4, ActivityCategory::Museum, 43.0707, 141.3633),
        curated("noboribetsu", "Noboribetsu Onsen Day Trip", City::Hokkaido, 0, 0, ActivityCategory::DayTrip, 42.4561, 141.1649),
        curated("asahiyama-zoo", "Asahiyama Zoo", City::Hokkaido, 1000, 9, ActivityCategory::Experience, 43.7681, 142.4792),
        curated("dazaifu", "Dazaifu Tenmangu Shrine", City::Fukuoka, 0, 0, ActivityCategory::Temple, 33.5191, 130.5350),
        curated("fukuoka-tower", "Fukuoka Tower", City::Fukuoka, 800, 7, ActivityCategory::Experience, 33.5933, 130.3518),
        curated("ohori-park", "Ohori Park", City::Fukuoka, 0, 0, ActivityCategory::Experience, 33.5847, 130.3771),
        curated("canal-city", "Canal City Hakata", City::Fukuoka, 0, 0, ActivityCategory::Experience, 33.5897, 130.4111),
        curated("yanagawa", "Yanagawa River Cruise", City::Fukuoka, 1650, 15, ActivityCategory::Experience, 33.1633, 130.4061),
        curated("churaumi", "Okinawa Churaumi Aquarium", City::Okinawa, 2180, 19, ActivityCategory::Museum, 26.6942, 127.8779),
        curated("shuri-castle", "Shuri Castle", City::Okinawa, 400, 4, ActivityCategory::Museum, 26.2170, 127.7195),
        curated("american-village", "American Village", City::Okinawa, 0, 0, ActivityCategory::Experience, 26.3177, 127.7558),
        curated("kokusai-street", "Kokusai Street Shopping", City::Okinawa, 0, 0, ActivityCategory::Experience, 26.2155, 127.6847),
        curated("kerama-snorkel", "Kerama Islands Snorkeling", City::Okinawa, 8000, 71, ActivityCategory::Experience, 26.1972, 127.3003),
        curated("okinawa-world", "Okinawa World Cave", City::Okinawa, 2000, 18, ActivityCategory::Experience, 26.1419, 127.7480),
        curated("nara-park", "Nara Park & Deer", City::Nara, 0, 0, ActivityCategory::Experience, 34.6851, 135.8430),
        curated("todai-ji", "Todai-ji Temple", City::Nara, 600, 5, ActivityCategory::Temple, 34.6890, 135.8398),
        curated("kasuga-taisha", "Kasuga Grand Shrine", City::Nara, 500, 4, ActivityCategory::Temple, 34.6812, 135.8480),
        curated("naramachi", "Naramachi Old Town Walk", City::Nara, 0, 0, ActivityCategory::Experience, 34.6794, 135.8290),
        curated("peace-memorial", "Hiroshima Peace Memorial", City::Hiroshima, 200, 2, ActivityCategory::Museum, 34.3955, 132.4536),
        curated("miyajima", "Miyajima Island Day Trip", City::Hiroshima, 500, 4, ActivityCategory::DayTrip, 34.2963, 132.3198),
        curated("hiroshima-castle", "Hiroshima Castle", City::Hiroshima, 370, 3, ActivityCategory::Museum, 34.4016, 132.4594),
        curated("shukkei-en", "Shukkei-en Garden", City::Hiroshima, 260, 2, ActivityCategory::Experience, 34.3987, 132.4665),
        curated("nagoya-castle", "Nagoya Castle", City::Nagoya, 500, 4, ActivityCategory::Museum, 35.1856, 136.8999),
        curated("toyota-museum", "Toyota Museum", City::Nagoya, 2000, 18, ActivityCategory::Museum, 35.1721, 136.9251),
        curated("osu-shopping", "Osu Shopping District", City::Nagoya, 0, 0, ActivityCategory::Experience, 35.1593, 136.9046),
        curated("atsuta-shrine", "Atsuta Shrine", City::Nagoya, 0, 0, ActivityCategory::Temple, 35.1278, 136.9091),
        curated("minato-mirai", "Minato Mirai", City::Yokohama, 0, 0, ActivityCategory::Experience, 35.4558, 139.6323),
        curated("cup-noodles", "Cup Noodles Museum", City::Yokohama, 500, 4, ActivityCategory::Museum, 35.4544, 139.6365),
        curated("yokohama-chinatown", "Yokohama Chinatown", City::Yokohama, 0, 0, ActivityCategory::Experience, 35.4423, 139.6453),
        curated("landmark-tower", "Landmark Tower Sky Garden", City::Yokohama, 1000, 9, ActivityCategory::Experience, 35.4553, 139.6310),
    ]
}
