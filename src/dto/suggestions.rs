use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{ClothingCategory, Color};

#[derive(Debug, Deserialize, ToSchema)]
pub struct WeatherOutfitRequest {
    pub weather_condition: String,
    pub temperature: f64,
    pub date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OccasionOutfitRequest {
    pub occasion: String,
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WardrobeWeather {
    pub condition: String,
    pub temperature: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WardrobeOutfitRequest {
    pub clothing_items: Vec<i32>,
    pub occasion: Option<String>,
    pub weather: Option<WardrobeWeather>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IllustratedPiece {
    pub category: ClothingCategory,
    pub description: String,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clothing_item_id: Option<i32>,
    /// `data:` URL of the piece illustration.
    pub image: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GeneratedOutfit {
    pub name: String,
    pub description: String,
    pub items: Vec<IllustratedPiece>,
    /// `data:` URL of the composite outfit illustration.
    pub outfit_image: String,
}
