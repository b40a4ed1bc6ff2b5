use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{ClothingCategory, Color, Season};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing, default)]
    #[schema(ignore)]
    pub password_hash: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClothingItem {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub category: ClothingCategory,
    pub colors: Vec<Color>,
    pub seasons: Vec<Season>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Outfit {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub items: Vec<i32>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShoppingItem {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub brand: String,
    pub category: ClothingCategory,
    pub image_url: Option<String>,
    pub colors: Vec<String>,
    pub compatible_with: Vec<i32>,
}

/// Insert payloads handed to the storage layer after validation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewClothingItem {
    pub user_id: i32,
    pub name: String,
    pub category: ClothingCategory,
    pub colors: Vec<Color>,
    pub seasons: Vec<Season>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewOutfit {
    pub user_id: i32,
    pub name: String,
    pub items: Vec<i32>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone)]
pub struct NewShoppingItem {
    pub name: String,
    pub price: i32,
    pub brand: String,
    pub category: ClothingCategory,
    pub image_url: Option<String>,
    pub colors: Vec<String>,
    pub compatible_with: Vec<i32>,
}
