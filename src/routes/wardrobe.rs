use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::wardrobe::{ClothingItemRequest, ClothingList, ClothingQuery},
    error::AppResult,
    extract::{AppJson, AppPath, AppQuery},
    middleware::auth::AuthUser,
    models::ClothingItem,
    response::ApiResponse,
    services::wardrobe_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clothing", get(list_clothing).post(add_clothing))
        .route(
            "/clothing/{id}",
            get(get_clothing).put(update_clothing).delete(delete_clothing),
        )
}

#[utoipa::path(
    get,
    path = "/api/wardrobe/clothing",
    params(ClothingQuery),
    responses(
        (status = 200, description = "List the caller's clothing items", body = ApiResponse<ClothingList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Wardrobe"
)]
pub async fn list_clothing(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<ClothingQuery>,
) -> AppResult<Json<ApiResponse<ClothingList>>> {
    let resp = wardrobe_service::list_items(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/wardrobe/clothing",
    request_body = ClothingItemRequest,
    responses(
        (status = 201, description = "Add a clothing item", body = ApiResponse<ClothingItem>),
        (status = 400, description = "Bad Request")
    ),
    security(("bearer_auth" = [])),
    tag = "Wardrobe"
)]
pub async fn add_clothing(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<ClothingItemRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ClothingItem>>)> {
    let resp = wardrobe_service::add_item(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/wardrobe/clothing/{id}",
    params(
        ("id" = i32, Path, description = "Clothing item ID")
    ),
    responses(
        (status = 200, description = "Get a clothing item", body = ApiResponse<ClothingItem>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Clothing item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Wardrobe"
)]
pub async fn get_clothing(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<ClothingItem>>> {
    let resp = wardrobe_service::get_item(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/wardrobe/clothing/{id}",
    params(
        ("id" = i32, Path, description = "Clothing item ID")
    ),
    request_body = ClothingItemRequest,
    responses(
        (status = 200, description = "Replace a clothing item", body = ApiResponse<ClothingItem>),
        (status = 400, description = "Bad Request"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Clothing item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Wardrobe"
)]
pub async fn update_clothing(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ClothingItemRequest>,
) -> AppResult<Json<ApiResponse<ClothingItem>>> {
    let resp = wardrobe_service::update_item(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/wardrobe/clothing/{id}",
    params(
        ("id" = i32, Path, description = "Clothing item ID")
    ),
    responses(
        (status = 200, description = "Delete a clothing item and drop it from saved outfits", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Clothing item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Wardrobe"
)]
pub async fn delete_clothing(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = wardrobe_service::delete_item(&state, &user, id).await?;
    Ok(Json(resp))
}
