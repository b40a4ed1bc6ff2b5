use crate::{
    dto::shopping::{ShoppingList, ShoppingQuery},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::ShoppingItem,
    response::{ApiResponse, Meta},
    services::wardrobe_service::owned_item,
    state::AppState,
};

pub async fn list_items(
    state: &AppState,
    query: ShoppingQuery,
) -> AppResult<ApiResponse<ShoppingList>> {
    let items: Vec<ShoppingItem> = state
        .storage
        .list_shopping()
        .await?
        .into_iter()
        .filter(|item| query.category.is_none_or(|c| c == item.category))
        .collect();

    let total = items.len();
    Ok(ApiResponse::success(
        "Shopping items",
        ShoppingList { items },
        Some(Meta::unpaged(total)),
    ))
}

pub async fn get_item(state: &AppState, id: i32) -> AppResult<ApiResponse<ShoppingItem>> {
    let item = state
        .storage
        .get_shopping(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Shopping item", item, None))
}

/// Catalog items that pair with one of the caller's clothing items.
pub async fn compatible_with(
    state: &AppState,
    user: &AuthUser,
    clothing_item_id: i32,
) -> AppResult<ApiResponse<ShoppingList>> {
    owned_item(state, user, clothing_item_id).await?;
    let items = state
        .storage
        .shopping_compatible_with(clothing_item_id)
        .await?;
    let total = items.len();
    Ok(ApiResponse::success(
        "Compatible shopping items",
        ShoppingList { items },
        Some(Meta::unpaged(total)),
    ))
}
