use crate::{
    audit::log_audit,
    dto::outfits::{OutfitList, OutfitQuery, OutfitRequest},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_owner},
    models::{NewOutfit, Outfit},
    response::{ApiResponse, Meta},
    state::AppState,
};

fn optional_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Validate the request. Item ownership is enforced by the storage write.
fn resolve(user: &AuthUser, payload: OutfitRequest) -> AppResult<NewOutfit> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }

    let mut items: Vec<i32> = Vec::with_capacity(payload.items.len());
    for id in payload.items {
        if !items.contains(&id) {
            items.push(id);
        }
    }

    Ok(NewOutfit {
        user_id: user.user_id,
        name: payload.name.trim().to_string(),
        items,
        occasion: optional_text(payload.occasion),
        weather: optional_text(payload.weather),
        is_favorite: payload.is_favorite,
    })
}

async fn owned_outfit(state: &AppState, user: &AuthUser, id: i32) -> AppResult<Outfit> {
    let outfit = state
        .storage
        .get_outfit(id)
        .await?
        .ok_or(AppError::NotFound)?;
    ensure_owner(user, outfit.user_id)?;
    Ok(outfit)
}

pub async fn list_outfits(
    state: &AppState,
    user: &AuthUser,
    query: OutfitQuery,
) -> AppResult<ApiResponse<OutfitList>> {
    let outfits: Vec<Outfit> = state
        .storage
        .list_outfits_by_user(user.user_id)
        .await?
        .into_iter()
        .filter(|o| !query.favorites_only || o.is_favorite)
        .collect();

    let (items, meta) = query.pagination().apply(outfits);
    Ok(ApiResponse::success("OK", OutfitList { items }, Some(meta)))
}

pub async fn get_outfit(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Outfit>> {
    let outfit = owned_outfit(state, user, id).await?;
    Ok(ApiResponse::success("Outfit", outfit, None))
}

pub async fn create_outfit(
    state: &AppState,
    user: &AuthUser,
    payload: OutfitRequest,
) -> AppResult<ApiResponse<Outfit>> {
    let new_outfit = resolve(user, payload)?;
    let outfit = state.storage.create_outfit(new_outfit).await?;

    log_audit(
        Some(user.user_id),
        "outfit_create",
        Some("outfits"),
        Some(serde_json::json!({ "outfit_id": outfit.id })),
    );

    Ok(ApiResponse::success(
        "Outfit created",
        outfit,
        Some(Meta::empty()),
    ))
}

pub async fn update_outfit(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: OutfitRequest,
) -> AppResult<ApiResponse<Outfit>> {
    owned_outfit(state, user, id).await?;
    let new_outfit = resolve(user, payload)?;
    let outfit = state.storage.update_outfit(id, new_outfit).await?;

    log_audit(
        Some(user.user_id),
        "outfit_update",
        Some("outfits"),
        Some(serde_json::json!({ "outfit_id": id })),
    );

    Ok(ApiResponse::success("Updated", outfit, Some(Meta::empty())))
}

pub async fn toggle_favorite(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Outfit>> {
    let existing = owned_outfit(state, user, id).await?;
    let is_favorite = !existing.is_favorite;
    let outfit = state
        .storage
        .update_outfit(
            id,
            NewOutfit {
                user_id: existing.user_id,
                name: existing.name,
                items: existing.items,
                occasion: existing.occasion,
                weather: existing.weather,
                is_favorite,
            },
        )
        .await?;

    log_audit(
        Some(user.user_id),
        if is_favorite { "outfit_favorite" } else { "outfit_unfavorite" },
        Some("outfits"),
        Some(serde_json::json!({ "outfit_id": id })),
    );

    Ok(ApiResponse::success("Updated", outfit, Some(Meta::empty())))
}

pub async fn delete_outfit(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    owned_outfit(state, user, id).await?;
    state.storage.delete_outfit(id).await?;

    log_audit(
        Some(user.user_id),
        "outfit_delete",
        Some("outfits"),
        Some(serde_json::json!({ "outfit_id": id })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
