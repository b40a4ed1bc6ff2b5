use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::outfits::{OutfitList, OutfitQuery, OutfitRequest},
    error::AppResult,
    extract::{AppJson, AppPath, AppQuery},
    middleware::auth::AuthUser,
    models::Outfit,
    response::ApiResponse,
    services::outfit_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_outfits).post(create_outfit))
        .route(
            "/{id}",
            get(get_outfit).put(update_outfit).delete(delete_outfit),
        )
        .route("/{id}/favorite", post(toggle_favorite))
}

#[utoipa::path(
    get,
    path = "/api/outfits",
    params(OutfitQuery),
    responses(
        (status = 200, description = "List saved outfits", body = ApiResponse<OutfitList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Outfits"
)]
pub async fn list_outfits(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<OutfitQuery>,
) -> AppResult<Json<ApiResponse<OutfitList>>> {
    let resp = outfit_service::list_outfits(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/outfits",
    request_body = OutfitRequest,
    responses(
        (status = 201, description = "Save an outfit", body = ApiResponse<Outfit>),
        (status = 400, description = "Bad Request")
    ),
    security(("bearer_auth" = [])),
    tag = "Outfits"
)]
pub async fn create_outfit(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<OutfitRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Outfit>>)> {
    let resp = outfit_service::create_outfit(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/outfits/{id}",
    params(
        ("id" = i32, Path, description = "Outfit ID")
    ),
    responses(
        (status = 200, description = "Get an outfit", body = ApiResponse<Outfit>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Outfit not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Outfits"
)]
pub async fn get_outfit(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<Outfit>>> {
    let resp = outfit_service::get_outfit(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/outfits/{id}",
    params(
        ("id" = i32, Path, description = "Outfit ID")
    ),
    request_body = OutfitRequest,
    responses(
        (status = 200, description = "Replace an outfit", body = ApiResponse<Outfit>),
        (status = 400, description = "Bad Request"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Outfit not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Outfits"
)]
pub async fn update_outfit(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<OutfitRequest>,
) -> AppResult<Json<ApiResponse<Outfit>>> {
    let resp = outfit_service::update_outfit(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/outfits/{id}/favorite",
    params(
        ("id" = i32, Path, description = "Outfit ID")
    ),
    responses(
        (status = 200, description = "Toggle the favorite flag", body = ApiResponse<Outfit>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Outfit not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Outfits"
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<Outfit>>> {
    let resp = outfit_service::toggle_favorite(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/outfits/{id}",
    params(
        ("id" = i32, Path, description = "Outfit ID")
    ),
    responses(
        (status = 200, description = "Delete an outfit", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Outfit not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Outfits"
)]
pub async fn delete_outfit(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = outfit_service::delete_outfit(&state, &user, id).await?;
    Ok(Json(resp))
}
