//! Rule tables that turn weather, an occasion or a handful of wardrobe
//! items into an outfit proposal. Everything here is pure.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    catalog::{ClothingCategory, Color, Season},
    models::ClothingItem,
};

/// A single suggested piece.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SuggestedPiece {
    pub category: ClothingCategory,
    pub description: String,
    pub color: Color,
    /// Wardrobe item the piece was taken from, when built from a wardrobe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clothing_item_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OutfitProposal {
    pub name: String,
    pub description: String,
    pub items: Vec<SuggestedPiece>,
}

/// Weather context supplied with a wardrobe request.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherContext {
    pub condition: String,
    pub temperature: f64,
}

struct Piece {
    category: ClothingCategory,
    description: &'static str,
    /// Closed footwear that gets swapped for waterproof shoes in the rain.
    rain_swap: bool,
}

const fn piece(category: ClothingCategory, description: &'static str) -> Piece {
    Piece {
        category,
        description,
        rain_swap: false,
    }
}

const fn footwear(description: &'static str) -> Piece {
    Piece {
        category: ClothingCategory::Shoes,
        description,
        rain_swap: true,
    }
}

struct TemperatureRule {
    pieces: &'static [Piece],
    palette: &'static [Color],
}

const COLD: TemperatureRule = TemperatureRule {
    pieces: &[
        piece(ClothingCategory::Jackets, "Warm winter coat"),
        piece(ClothingCategory::Jackets, "Wool sweater"),
        piece(ClothingCategory::Pants, "Thick fabric trousers"),
        footwear("Comfortable winter boots"),
    ],
    palette: &[Color::Black, Color::Gray, Color::Blue],
};

const COOL: TemperatureRule = TemperatureRule {
    pieces: &[
        piece(ClothingCategory::Jackets, "Light jacket"),
        piece(ClothingCategory::Shirts, "Long-sleeve shirt"),
        piece(ClothingCategory::Pants, "Jeans"),
        footwear("Sneakers"),
    ],
    palette: &[Color::Blue, Color::Green, Color::Brown],
};

const WARM: TemperatureRule = TemperatureRule {
    pieces: &[
        piece(ClothingCategory::Shirts, "Cotton t-shirt"),
        piece(ClothingCategory::Pants, "Lightweight trousers"),
        footwear("Comfortable sneakers"),
    ],
    palette: &[Color::White, Color::Blue, Color::Blue],
};

const HOT: TemperatureRule = TemperatureRule {
    pieces: &[
        piece(ClothingCategory::Shirts, "Light cotton t-shirt"),
        piece(ClothingCategory::Pants, "Shorts"),
        piece(ClothingCategory::Shoes, "Comfortable sandals"),
    ],
    palette: &[Color::White, Color::Blue, Color::Brown],
};

const RAIN_KEYWORDS: &[&str] = &["rain", "مطر"];
const WATERPROOF_SHOES: &str = "Waterproof shoes";

fn temperature_rule(temperature: f64) -> &'static TemperatureRule {
    if temperature < 10.0 {
        &COLD
    } else if temperature < 20.0 {
        &COOL
    } else if temperature < 30.0 {
        &WARM
    } else {
        &HOT
    }
}

fn is_rainy(condition: &str) -> bool {
    let condition = condition.to_lowercase();
    RAIN_KEYWORDS.iter().any(|k| condition.contains(k))
}

/// Outfit for a temperature in °C and a free-text weather condition.
pub fn for_weather(temperature: f64, condition: &str) -> OutfitProposal {
    let rule = temperature_rule(temperature);
    let rainy = is_rainy(condition);

    let items = rule
        .pieces
        .iter()
        .enumerate()
        .map(|(index, p)| SuggestedPiece {
            category: p.category,
            description: if rainy && p.rain_swap {
                WATERPROOF_SHOES.to_string()
            } else {
                p.description.to_string()
            },
            color: rule.palette[index % rule.palette.len()],
            clothing_item_id: None,
        })
        .collect();

    OutfitProposal {
        name: format!("Outfit for {temperature}°C and {condition}"),
        description: format!(
            "A comfortable look for {condition} weather at {temperature}°C. \
             The pieces were picked to stay comfortable and stylish in these conditions."
        ),
        items,
    }
}

struct OccasionRule {
    keywords: &'static [&'static str],
    name: &'static str,
    description: &'static str,
    pieces: [(ClothingCategory, &'static str, Color); 3],
}

const OCCASIONS: &[OccasionRule] = &[
    OccasionRule {
        keywords: &["work", "عمل"],
        name: "Formal work outfit",
        description: "A professional, polished look suited to the workplace",
        pieces: [
            (ClothingCategory::Shirts, "Smart shirt", Color::White),
            (ClothingCategory::Pants, "Classic trousers", Color::Blue),
            (ClothingCategory::Shoes, "Formal shoes", Color::Black),
        ],
    },
    OccasionRule {
        keywords: &["party", "حفلة"],
        name: "Evening party outfit",
        description: "An elegant, modern look for parties and evening events",
        pieces: [
            (ClothingCategory::Shirts, "Smart shirt", Color::Black),
            (ClothingCategory::Pants, "Smart trousers", Color::Black),
            (ClothingCategory::Shoes, "Smart shoes", Color::Black),
        ],
    },
    OccasionRule {
        keywords: &["shopping", "تسوق"],
        name: "Casual shopping outfit",
        description: "A comfortable, practical look for everyday shopping",
        pieces: [
            (ClothingCategory::Shirts, "Comfortable t-shirt", Color::Gray),
            (ClothingCategory::Pants, "Jeans", Color::Blue),
            (ClothingCategory::Shoes, "Sneakers", Color::White),
        ],
    },
    OccasionRule {
        keywords: &["sport", "رياضة"],
        name: "Sporty outfit",
        description: "A comfortable athletic look for physical activity",
        pieces: [
            (ClothingCategory::Shirts, "Sports t-shirt", Color::Black),
            (ClothingCategory::Pants, "Track pants", Color::Blue),
            (ClothingCategory::Shoes, "Running shoes", Color::White),
        ],
    },
    OccasionRule {
        keywords: &["outing", "تنزه"],
        name: "Outing outfit",
        description: "A relaxed look for walks and everyday outings",
        pieces: [
            (ClothingCategory::Shirts, "Casual t-shirt", Color::Blue),
            (ClothingCategory::Pants, "Lightweight trousers", Color::Brown),
            (ClothingCategory::Shoes, "Comfortable shoes", Color::Brown),
        ],
    },
];

fn pieces_of(pieces: &[(ClothingCategory, &str, Color)]) -> Vec<SuggestedPiece> {
    pieces
        .iter()
        .map(|(category, description, color)| SuggestedPiece {
            category: *category,
            description: description.to_string(),
            color: *color,
            clothing_item_id: None,
        })
        .collect()
}

/// Outfit for a free-text occasion. The first table entry whose keyword
/// appears in the occasion wins; `_preferences` do not influence the table.
pub fn for_occasion(occasion: &str, _preferences: &[String]) -> OutfitProposal {
    let lowered = occasion.to_lowercase();

    if let Some(rule) = OCCASIONS
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
    {
        return OutfitProposal {
            name: rule.name.to_string(),
            description: rule.description.to_string(),
            items: pieces_of(&rule.pieces),
        };
    }

    OutfitProposal {
        name: format!("Outfit for {occasion}"),
        description: format!("A smart look suited to {occasion}"),
        items: pieces_of(&[
            (ClothingCategory::Shirts, "Smart shirt", Color::White),
            (ClothingCategory::Pants, "Smart trousers", Color::Blue),
            (ClothingCategory::Shoes, "Comfortable shoes", Color::Black),
        ]),
    }
}

const ESSENTIALS: [ClothingCategory; 3] = [
    ClothingCategory::Shirts,
    ClothingCategory::Pants,
    ClothingCategory::Shoes,
];

/// Outfit assembled from the caller's own items.
///
/// With weather, items are kept when they are tagged for the season implied
/// by the temperature or for spring. Then one shirt, one pair of pants, one
/// pair of shoes and one accessory are taken, each the lowest-id candidate.
/// Returns `None` when `items` is empty.
pub fn from_wardrobe(
    items: &[ClothingItem],
    occasion: Option<&str>,
    weather: Option<&WeatherContext>,
) -> Option<OutfitProposal> {
    if items.is_empty() {
        return None;
    }

    let mut candidates: Vec<&ClothingItem> = items.iter().collect();
    candidates.sort_by_key(|item| item.id);

    if let Some(weather) = weather {
        let season = Season::for_temperature(weather.temperature);
        candidates.retain(|item| {
            item.seasons.contains(&season) || item.seasons.contains(&Season::Spring)
        });
    }

    let first_of = |category: ClothingCategory| {
        candidates
            .iter()
            .copied()
            .find(|item| item.category == category)
    };

    let picked: Vec<&ClothingItem> = ESSENTIALS
        .iter()
        .copied()
        .chain(std::iter::once(ClothingCategory::Accessories))
        .filter_map(first_of)
        .collect();

    let occasion = occasion.map(str::trim).filter(|o| !o.is_empty());
    let (mut name, mut description) = match occasion {
        Some(occasion) => (
            format!("{occasion} outfit from your wardrobe"),
            format!("Pieces from your own wardrobe chosen for {occasion}"),
        ),
        None => (
            "Outfit from your wardrobe".to_string(),
            "A coordinated set of pieces from your wardrobe".to_string(),
        ),
    };

    if let Some(weather) = weather {
        name.push_str(&format!(" for {}°C", weather.temperature));
        description.push_str(&format!(
            ", suited to {} weather at {}°C",
            weather.condition, weather.temperature
        ));
    }

    Some(OutfitProposal {
        name,
        description,
        items: picked
            .into_iter()
            .map(|item| SuggestedPiece {
                category: item.category,
                description: item.name.clone(),
                color: item.colors.first().copied().unwrap_or(Color::Other),
                clothing_item_id: Some(item.id),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn categories(outfit: &OutfitProposal) -> Vec<ClothingCategory> {
        outfit.items.iter().map(|p| p.category).collect()
    }

    fn item(id: i32, category: ClothingCategory, seasons: &[Season]) -> ClothingItem {
        ClothingItem {
            id,
            user_id: 1,
            name: format!("item-{id}"),
            category,
            colors: vec![Color::Red, Color::Black],
            seasons: seasons.to_vec(),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn temperature_buckets_pick_layers() {
        use ClothingCategory::*;
        assert_eq!(categories(&for_weather(9.0, "clear")), vec![Jackets, Jackets, Pants, Shoes]);
        assert_eq!(categories(&for_weather(10.0, "clear")), vec![Jackets, Shirts, Pants, Shoes]);
        assert_eq!(categories(&for_weather(19.5, "clear")), vec![Jackets, Shirts, Pants, Shoes]);
        assert_eq!(categories(&for_weather(20.0, "clear")), vec![Shirts, Pants, Shoes]);
        assert_eq!(categories(&for_weather(30.0, "clear")), vec![Shirts, Pants, Shoes]);
    }

    #[test]
    fn palette_wraps_around() {
        let outfit = for_weather(0.0, "snow");
        let colors: Vec<Color> = outfit.items.iter().map(|p| p.color).collect();
        assert_eq!(colors, vec![Color::Black, Color::Gray, Color::Blue, Color::Black]);
    }

    #[test]
    fn rain_swaps_closed_footwear_only() {
        let cold = for_weather(5.0, "Heavy Rain");
        assert_eq!(cold.items[3].description, "Waterproof shoes");
        assert_eq!(cold.items[0].description, "Warm winter coat");

        let arabic = for_weather(15.0, "مطر خفيف");
        assert_eq!(arabic.items[3].description, "Waterproof shoes");

        let hot = for_weather(35.0, "rain");
        assert_eq!(hot.items[2].description, "Comfortable sandals");
    }

    #[test]
    fn weather_outfit_is_named_after_conditions() {
        let outfit = for_weather(25.0, "sunny");
        assert_eq!(outfit.name, "Outfit for 25°C and sunny");
        assert!(outfit.description.contains("sunny"));
    }

    #[test]
    fn occasion_keywords_match_inside_text() {
        let outfit = for_occasion("Dinner PARTY with friends", &[]);
        assert_eq!(outfit.name, "Evening party outfit");
        assert!(outfit.items.iter().all(|p| p.color == Color::Black));

        let arabic = for_occasion("يوم عمل", &[]);
        assert_eq!(arabic.name, "Formal work outfit");
    }

    #[test]
    fn first_matching_occasion_wins() {
        // "work" is checked before "sport"
        let outfit = for_occasion("sport then work", &[]);
        assert_eq!(outfit.name, "Formal work outfit");
    }

    #[test]
    fn unknown_occasion_falls_back_to_default() {
        let outfit = for_occasion("graduation", &["blue".to_string()]);
        assert_eq!(outfit.name, "Outfit for graduation");
        assert_eq!(outfit.items.len(), 3);
        assert_eq!(outfit.items[0].color, Color::White);
    }

    #[test]
    fn wardrobe_outfit_takes_one_per_essential_category() {
        let items = vec![
            item(4, ClothingCategory::Shirts, &[Season::Summer]),
            item(2, ClothingCategory::Shirts, &[Season::Summer]),
            item(3, ClothingCategory::Pants, &[Season::Summer]),
            item(5, ClothingCategory::Accessories, &[Season::Summer]),
            item(6, ClothingCategory::Jackets, &[Season::Summer]),
        ];
        let outfit = from_wardrobe(&items, None, None).unwrap();
        let ids: Vec<_> = outfit.items.iter().filter_map(|p| p.clothing_item_id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
        assert_eq!(outfit.items[0].description, "item-2");
        assert_eq!(outfit.items[0].color, Color::Red);
        assert_eq!(outfit.name, "Outfit from your wardrobe");
    }

    #[test]
    fn wardrobe_outfit_filters_by_season_with_spring_passthrough() {
        let items = vec![
            item(1, ClothingCategory::Shirts, &[Season::Summer]),
            item(2, ClothingCategory::Shirts, &[Season::Spring]),
            item(3, ClothingCategory::Shoes, &[Season::Winter]),
        ];
        let weather = WeatherContext {
            condition: "snow".into(),
            temperature: 2.0,
        };
        let outfit = from_wardrobe(&items, Some("work"), Some(&weather)).unwrap();
        let ids: Vec<_> = outfit.items.iter().filter_map(|p| p.clothing_item_id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(outfit.name, "work outfit from your wardrobe for 2°C");
        assert!(outfit.description.contains("snow"));
    }

    #[test]
    fn empty_wardrobe_yields_nothing() {
        assert!(from_wardrobe(&[], None, None).is_none());
    }
}
