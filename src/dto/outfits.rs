use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{models::Outfit, routes::params::Pagination};

#[derive(Debug, Deserialize, ToSchema)]
pub struct OutfitRequest {
    pub name: String,
    pub items: Vec<i32>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OutfitQuery {
    #[serde(default)]
    pub favorites_only: bool,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl OutfitQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OutfitList {
    #[schema(value_type = Vec<Outfit>)]
    pub items: Vec<Outfit>,
}
