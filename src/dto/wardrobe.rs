use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    catalog::{ClothingCategory, Color, Season},
    models::ClothingItem,
    routes::params::Pagination,
};

/// Body of both create and full update. On update an omitted `image_url`
/// keeps the stored one.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ClothingItemRequest {
    pub name: String,
    pub category: ClothingCategory,
    pub colors: Vec<Color>,
    pub seasons: Vec<Season>,
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClothingQuery {
    pub category: Option<ClothingCategory>,
    pub color: Option<Color>,
    pub season: Option<Season>,
    /// Case-insensitive substring of the item name.
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ClothingQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }

    pub fn matches(&self, item: &ClothingItem) -> bool {
        if self.category.is_some_and(|c| c != item.category) {
            return false;
        }
        if self.color.is_some_and(|c| !item.colors.contains(&c)) {
            return false;
        }
        if self.season.is_some_and(|s| !item.seasons.contains(&s)) {
            return false;
        }
        match self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => item.name.to_lowercase().contains(&q.to_lowercase()),
            None => true,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ClothingList {
    #[schema(value_type = Vec<ClothingItem>)]
    pub items: Vec<ClothingItem>,
}
