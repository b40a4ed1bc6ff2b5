use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::shopping::{ShoppingList, ShoppingQuery},
    error::AppResult,
    extract::{AppPath, AppQuery},
    middleware::auth::AuthUser,
    models::ShoppingItem,
    response::ApiResponse,
    services::shopping_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shopping))
        .route("/{id}", get(get_shopping))
        .route("/compatible/{clothing_item_id}", get(compatible_shopping))
}

#[utoipa::path(
    get,
    path = "/api/shopping",
    params(ShoppingQuery),
    responses(
        (status = 200, description = "List the shopping catalog", body = ApiResponse<ShoppingList>)
    ),
    tag = "Shopping"
)]
pub async fn list_shopping(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ShoppingQuery>,
) -> AppResult<Json<ApiResponse<ShoppingList>>> {
    let resp = shopping_service::list_items(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/shopping/{id}",
    params(
        ("id" = i32, Path, description = "Shopping item ID")
    ),
    responses(
        (status = 200, description = "Get a shopping item", body = ApiResponse<ShoppingItem>),
        (status = 404, description = "Shopping item not found")
    ),
    tag = "Shopping"
)]
pub async fn get_shopping(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<ShoppingItem>>> {
    let resp = shopping_service::get_item(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/shopping/compatible/{clothing_item_id}",
    params(
        ("clothing_item_id" = i32, Path, description = "Clothing item ID from the caller's wardrobe")
    ),
    responses(
        (status = 200, description = "Catalog items that pair with a clothing item", body = ApiResponse<ShoppingList>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Clothing item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Shopping"
)]
pub async fn compatible_shopping(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(clothing_item_id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<ShoppingList>>> {
    let resp = shopping_service::compatible_with(&state, &user, clothing_item_id).await?;
    Ok(Json(resp))
}
