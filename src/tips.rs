//! Money-saving advice and per-city recommendations

use serde::Serialize;

use crate::models::{City, TravelStyle};

named_enum! {
    pub enum TipCategory {
        Transport => "Transport",
        Food => "Food",
        Accommodation => "Accommodation",
        Shopping => "Shopping",
        Activities => "Activities",
    }
}

/// A saving with a rough SGD figure attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingTip {
    pub category: TipCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub savings: &'static str,
}

/// General advice shown alongside the estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneralTip {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityGuide {
    pub city: City,
    pub must_see: &'static [&'static str],
    pub hidden_gems: &'static [&'static str],
    pub food_spots: &'static [&'static str],
    pub local_foods: &'static [&'static str],
}

const fn saving(
    category: TipCategory,
    title: &'static str,
    description: &'static str,
    savings: &'static str,
) -> SavingTip {
    SavingTip {
        category,
        title,
        description,
        savings,
    }
}

const fn general(title: &'static str, description: &'static str, icon: &'static str) -> GeneralTip {
    GeneralTip {
        title,
        description,
        icon,
    }
}

pub const SAVING_TIPS: &[SavingTip] = &[
    saving(
        TipCategory::Transport,
        "Get a JR Pass",
        "Save up to 50% on shinkansen and JR trains with a 7, 14, or 21-day pass",
        "Up to S$300+ for a week of travel",
    ),
    saving(
        TipCategory::Transport,
        "Use IC Cards",
        "Get a Suica or Pasmo card for convenient tap-and-go on all trains and buses",
        "Saves time and small change",
    ),
    saving(
        TipCategory::Food,
        "Eat at Convenience Stores",
        "7-Eleven, Lawson, and FamilyMart offer quality onigiri, bento, and snacks",
        "S$5-10 per meal vs restaurants",
    ),
    saving(
        TipCategory::Food,
        "Try Department Store Basement Food Halls",
        "Depachika offers discounted bento and food near closing time",
        "30-50% off quality food after 7pm",
    ),
    saving(
        TipCategory::Accommodation,
        "Stay in Business Hotels",
        "Chains like Toyoko Inn, APA, and Dormy Inn offer clean rooms at good prices",
        "S$50-80 per night vs mid-range hotels",
    ),
    saving(
        TipCategory::Accommodation,
        "Consider Capsule Hotels",
        "A unique Japanese experience that's budget-friendly",
        "S$30-50 per night",
    ),
    saving(
        TipCategory::Shopping,
        "Tax-Free Shopping",
        "Spend over ¥5,000 at participating stores to get 10% consumption tax refunded",
        "10% off major purchases",
    ),
    saving(
        TipCategory::Activities,
        "Free Shrines and Temples",
        "Many famous shrines and temple grounds are free to enter",
        "S$5-15 per attraction",
    ),
];

pub const GENERAL_TIPS: &[GeneralTip] = &[
    general(
        "Tax-Free Shopping",
        "As a tourist, you can get 10% consumption tax refund on purchases over ¥5,000 at tax-free shops. Look for the 'Tax Free' signs and bring your passport!",
        "receipt",
    ),
    general(
        "IC Cards Save Time",
        "Get a Suica or Pasmo card immediately upon arrival. Use it for trains, buses, convenience stores, and vending machines. Avoids fumbling for exact change.",
        "credit-card",
    ),
    general(
        "Konbini is Your Friend",
        "7-Eleven, Lawson, and FamilyMart offer quality meals from $3-8 SGD. Onigiri, bento boxes, and sandwiches are fresh and delicious. ATMs here also accept foreign cards.",
        "store",
    ),
    general(
        "JR Pass Timing",
        "The JR Pass is worth it only if you're doing multiple long-distance shinkansen trips. A Tokyo-Osaka round trip alone almost covers a 7-day pass.",
        "train",
    ),
    general(
        "Free Attractions",
        "Many temples, shrines, and parks are free to enter. Senso-ji, Meiji Shrine, Fushimi Inari, and Nara Park offer world-class experiences at no cost.",
        "landmark",
    ),
    general(
        "Seasonal Pricing",
        "Avoid peak seasons (late March-early April for cherry blossoms, November for autumn leaves, year-end holidays) for cheaper flights and accommodation.",
        "calendar",
    ),
    general(
        "Cash is King",
        "Japan is still largely cash-based. Withdraw yen from 7-Eleven ATMs which accept foreign cards with reasonable fees.",
        "banknote",
    ),
    general(
        "Don't Tip",
        "Tipping is not customary in Japan and can even be considered rude. Service is already included and excellent everywhere.",
        "hand-coins",
    ),
];

pub const CAR_RENTAL_TIPS: &[&str] = &[
    "International Driving Permit (IDP) required - get it from AA Singapore before traveling",
    "Japan drives on the left side of the road (same as Singapore)",
    "Expressway tolls can add ¥5,000-10,000/day - consider an ETC card",
    "Parking in cities is expensive (¥1,500-3,000/day) - best for countryside trips",
    "GPS navigation usually available in English - request when booking",
    "Best value for Hokkaido, Okinawa, or rural areas where trains are limited",
];

/// Saving tips relevant to a travel style. Luxury travellers only get
/// transport and shopping advice.
#[must_use]
pub fn travel_tips(style: TravelStyle) -> Vec<SavingTip> {
    SAVING_TIPS
        .iter()
        .filter(|tip| {
            style != TravelStyle::Luxury
                || matches!(tip.category, TipCategory::Transport | TipCategory::Shopping)
        })
        .copied()
        .collect()
}

#[must_use]
pub fn city_guide(city: City) -> CityGuide {
    let (must_see, hidden_gems, food_spots, local_foods): (
        &'static [&'static str],
        &'static [&'static str],
        &'static [&'static str],
        &'static [&'static str],
    ) = match city {
        City::Tokyo => (
            &[
                "Senso-ji Temple in Asakusa",
                "Shibuya Crossing",
                "Meiji Shrine",
                "Tokyo Skytree",
                "Tsukiji Outer Market",
            ],
            &[
                "Yanaka neighborhood for old Tokyo charm",
                "Shimokitazawa for vintage shopping",
                "Koenji for live music and izakayas",
            ],
            &[
                "Ramen at Ichiran or Fuunji",
                "Sushi at Tsukiji Outer Market",
                "Yakitori at Yurakucho under the tracks",
            ],
            &[
                "Tsukiji Outer Market sushi",
                "Ichiran Ramen",
                "Gyukatsu Motomura",
                "Afuri Yuzu Ramen",
                "Shibuya yakitori",
            ],
        ),
        City::Osaka => (
            &[
                "Osaka Castle",
                "Dotonbori",
                "Shinsekai",
                "Kuromon Market",
                "Universal Studios Japan",
            ],
            &[
                "Nakazakicho for retro cafes",
                "Shinsekai for classic atmosphere",
                "Hozenji Yokocho for traditional vibes",
            ],
            &[
                "Takoyaki at Dotonbori",
                "Okonomiyaki at Mizuno",
                "Kushikatsu at Daruma",
            ],
            &[
                "Takoyaki at Dotonbori",
                "Okonomiyaki at Mizuno",
                "Kushikatsu",
                "Kani Doraku crab",
                "Rikuro cheesecake",
            ],
        ),
        City::Kyoto => (
            &[
                "Fushimi Inari Shrine",
                "Kinkaku-ji (Golden Pavilion)",
                "Arashiyama Bamboo Grove",
                "Gion District",
                "Nijo Castle",
            ],
            &[
                "Philosopher's Path at dawn",
                "Nishiki Market backstreets",
                "Kurama-dera mountain temple",
            ],
            &[
                "Kaiseki at traditional ryokan",
                "Matcha everything in Uji",
                "Yudofu (tofu hot pot) near temples",
            ],
            &[
                "Tofu kaiseki",
                "Matcha everything",
                "Yudofu (hot tofu)",
                "Nishin soba",
                "Yuba",
            ],
        ),
        City::Hokkaido => (
            &[
                "Sapporo Beer Museum",
                "Otaru Canal",
                "Blue Pond in Biei",
                "Niseko Ski Resort (winter)",
                "Lavender fields in Furano (summer)",
            ],
            &["Noboribetsu Onsen", "Shakotan Peninsula", "Asahikawa Zoo"],
            &[
                "Miso ramen in Sapporo",
                "Fresh seafood at Nijo Market",
                "Genghis Khan BBQ (lamb)",
            ],
            &[
                "Miso ramen",
                "Genghis Khan BBQ",
                "Uni (sea urchin)",
                "Shiroi Koibito",
                "Yubari melon",
            ],
        ),
        City::Okinawa => (
            &[
                "Shuri Castle",
                "Churaumi Aquarium",
                "Kerama Islands",
                "Kokusai Street",
                "American Village",
            ],
            &[
                "Naminoue Shrine beach",
                "Zakimi Castle ruins",
                "Yanbaru National Park",
            ],
            &[
                "Okinawa soba",
                "Taco rice (local fusion)",
                "Umi-budo (sea grapes)",
            ],
            &[
                "Okinawa soba",
                "Goya champuru",
                "Sata andagi",
                "Awamori",
                "Purple sweet potato tarts",
            ],
        ),
        City::Fukuoka => (
            &["Canal City", "Ohori Park", "Hakata Old Town", "Yanagawa boat cruise"],
            &[],
            &[],
            &[
                "Hakata ramen",
                "Mentaiko",
                "Motsunabe",
                "Mizutaki",
                "Yatai street food",
            ],
        ),
        City::Nagoya => (
            &["Nagoya Castle", "Osu Shopping District", "Toyota Museum"],
            &[],
            &[],
            &[
                "Hitsumabushi (eel)",
                "Miso katsu",
                "Tebasaki wings",
                "Kishimen noodles",
            ],
        ),
        City::Hiroshima => (
            &["Peace Memorial Park", "Itsukushima Shrine", "Shukkei-en Garden"],
            &[],
            &[],
            &[
                "Hiroshima-style okonomiyaki",
                "Momiji manju",
                "Oysters",
                "Anago (conger eel)",
            ],
        ),
        City::Nara => (
            &["Nara Park", "Kasuga Grand Shrine", "Naramachi"],
            &[],
            &[],
            &[
                "Kakinoha-zushi",
                "Miwa somen",
                "Kuzu mochi",
                "Narazuke pickles",
            ],
        ),
        City::Yokohama => (
            &["Minato Mirai", "Chinatown", "Cup Noodles Museum", "Yamashita Park"],
            &[],
            &[],
            &[
                "Chinatown dim sum",
                "Sanma-men",
                "Yokohama ramen",
                "Cup Noodles",
            ],
        ),
    };

    CityGuide {
        city,
        must_see,
        hidden_gems,
        food_spots,
        local_foods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TravelStyle::Budget)]
    #[case(TravelStyle::Midrange)]
    fn test_full_tip_list(#[case] style: TravelStyle) {
        let tips = travel_tips(style);
        assert_eq!(tips.len(), SAVING_TIPS.len());
        assert!(tips.iter().all(|t| !t.title.is_empty() && !t.savings.is_empty()));
    }

    #[test]
    fn test_luxury_tips_are_transport_and_shopping() {
        let tips = travel_tips(TravelStyle::Luxury);
        assert_eq!(tips.len(), 3);
        assert!(
            tips.iter()
                .all(|t| matches!(t.category, TipCategory::Transport | TipCategory::Shopping))
        );
    }

    #[test]
    fn test_every_city_has_a_guide() {
        for city in City::ALL {
            let guide = city_guide(*city);
            assert_eq!(guide.city, *city);
            assert!(!guide.must_see.is_empty(), "{city}");
            assert!(!guide.local_foods.is_empty(), "{city}");
        }
    }

    #[test]
    fn test_curated_cities_have_hidden_gems() {
        for city in [City::Tokyo, City::Osaka, City::Kyoto, City::Hokkaido, City::Okinawa] {
            let guide = city_guide(city);
            assert_eq!(guide.hidden_gems.len(), 3);
            assert_eq!(guide.food_spots.len(), 3);
        }
        assert!(city_guide(City::Kyoto).must_see.contains(&"Fushimi Inari Shrine"));
    }

    #[test]
    fn test_guide_serializes_camel_case() {
        let json = serde_json::to_value(city_guide(City::Tokyo)).unwrap();
        assert_eq!(json["city"], "Tokyo");
        assert!(json["mustSee"].is_array());
        assert!(json["hiddenGems"].is_array());
        assert!(json["localFoods"].is_array());
    }

    #[test]
    fn test_tip_category_wire_names() {
        let json = serde_json::to_value(SAVING_TIPS[0]).unwrap();
        assert_eq!(json["category"], "Transport");
        assert_eq!(CAR_RENTAL_TIPS.len(), 6);
        assert_eq!(GENERAL_TIPS.len(), 8);
    }
}
