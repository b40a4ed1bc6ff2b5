use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{catalog::ClothingCategory, models::ShoppingItem};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShoppingQuery {
    pub category: Option<ClothingCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ShoppingList {
    #[schema(value_type = Vec<ShoppingItem>)]
    pub items: Vec<ShoppingItem>,
}
