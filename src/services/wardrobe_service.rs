use crate::{
    audit::log_audit,
    dto::wardrobe::{ClothingItemRequest, ClothingList, ClothingQuery},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_owner},
    models::{ClothingItem, NewClothingItem},
    response::{ApiResponse, Meta},
    state::AppState,
};

fn validate(payload: &ClothingItemRequest) -> AppResult<()> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }
    if payload.colors.is_empty() {
        return Err(AppError::BadRequest("at least one color is required".into()));
    }
    if payload.seasons.is_empty() {
        return Err(AppError::BadRequest("at least one season is required".into()));
    }
    Ok(())
}

fn dedup<T: PartialEq + Copy>(values: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(v) {
            out.push(*v);
        }
    }
    out
}

fn clean_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

/// Fetch an item and check that the caller owns it.
pub async fn owned_item(state: &AppState, user: &AuthUser, id: i32) -> AppResult<ClothingItem> {
    let item = state
        .storage
        .get_clothing(id)
        .await?
        .ok_or(AppError::NotFound)?;
    ensure_owner(user, item.user_id)?;
    Ok(item)
}

pub async fn list_items(
    state: &AppState,
    user: &AuthUser,
    query: ClothingQuery,
) -> AppResult<ApiResponse<ClothingList>> {
    let items: Vec<ClothingItem> = state
        .storage
        .list_clothing_by_user(user.user_id)
        .await?
        .into_iter()
        .filter(|item| query.matches(item))
        .collect();

    let (items, meta) = query.pagination().apply(items);
    Ok(ApiResponse::success("OK", ClothingList { items }, Some(meta)))
}

pub async fn get_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<ClothingItem>> {
    let item = owned_item(state, user, id).await?;
    Ok(ApiResponse::success("Clothing item", item, None))
}

pub async fn add_item(
    state: &AppState,
    user: &AuthUser,
    payload: ClothingItemRequest,
) -> AppResult<ApiResponse<ClothingItem>> {
    validate(&payload)?;
    let item = state
        .storage
        .create_clothing(NewClothingItem {
            user_id: user.user_id,
            name: payload.name.trim().to_string(),
            category: payload.category,
            colors: dedup(&payload.colors),
            seasons: dedup(&payload.seasons),
            image_url: clean_url(payload.image_url),
        })
        .await?;

    log_audit(
        Some(user.user_id),
        "clothing_create",
        Some("clothing_items"),
        Some(serde_json::json!({ "clothing_item_id": item.id })),
    );

    Ok(ApiResponse::success(
        "Clothing item created",
        item,
        Some(Meta::empty()),
    ))
}

pub async fn update_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: ClothingItemRequest,
) -> AppResult<ApiResponse<ClothingItem>> {
    let existing = owned_item(state, user, id).await?;
    validate(&payload)?;

    let image_url = clean_url(payload.image_url).or(existing.image_url);
    let item = state
        .storage
        .update_clothing(
            id,
            NewClothingItem {
                user_id: user.user_id,
                name: payload.name.trim().to_string(),
                category: payload.category,
                colors: dedup(&payload.colors),
                seasons: dedup(&payload.seasons),
                image_url,
            },
        )
        .await?;

    log_audit(
        Some(user.user_id),
        "clothing_update",
        Some("clothing_items"),
        Some(serde_json::json!({ "clothing_item_id": id })),
    );

    Ok(ApiResponse::success("Updated", item, Some(Meta::empty())))
}

pub async fn delete_item(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    owned_item(state, user, id).await?;
    state.storage.delete_clothing(id).await?;

    log_audit(
        Some(user.user_id),
        "clothing_delete",
        Some("clothing_items"),
        Some(serde_json::json!({ "clothing_item_id": id })),
    );

    Ok(ApiResponse::success(
        "Clothing item deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
