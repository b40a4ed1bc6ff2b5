use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::suggestions::{
        GeneratedOutfit, OccasionOutfitRequest, WardrobeOutfitRequest, WeatherOutfitRequest,
    },
    error::AppResult,
    extract::AppJson,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::suggestion_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/outfit", post(outfit_for_weather))
        .route("/outfit/occasion", post(outfit_for_occasion))
        .route("/outfit/wardrobe", post(outfit_from_wardrobe))
}

#[utoipa::path(
    post,
    path = "/api/ai/outfit",
    request_body = WeatherOutfitRequest,
    responses(
        (status = 200, description = "Outfit for the given weather", body = ApiResponse<GeneratedOutfit>),
        (status = 400, description = "Weather condition, temperature, and date are required")
    ),
    security(("bearer_auth" = [])),
    tag = "Suggestions"
)]
pub async fn outfit_for_weather(
    user: AuthUser,
    AppJson(payload): AppJson<WeatherOutfitRequest>,
) -> AppResult<Json<ApiResponse<GeneratedOutfit>>> {
    let resp = suggestion_service::for_weather(&user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/ai/outfit/occasion",
    request_body = OccasionOutfitRequest,
    responses(
        (status = 200, description = "Outfit for the given occasion", body = ApiResponse<GeneratedOutfit>),
        (status = 400, description = "Occasion is required")
    ),
    security(("bearer_auth" = [])),
    tag = "Suggestions"
)]
pub async fn outfit_for_occasion(
    user: AuthUser,
    AppJson(payload): AppJson<OccasionOutfitRequest>,
) -> AppResult<Json<ApiResponse<GeneratedOutfit>>> {
    let resp = suggestion_service::for_occasion(&user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/ai/outfit/wardrobe",
    request_body = WardrobeOutfitRequest,
    responses(
        (status = 200, description = "Outfit assembled from the caller's wardrobe", body = ApiResponse<GeneratedOutfit>),
        (status = 400, description = "At least one clothing item is required"),
        (status = 404, description = "No valid clothing items found in your wardrobe")
    ),
    security(("bearer_auth" = [])),
    tag = "Suggestions"
)]
pub async fn outfit_from_wardrobe(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<WardrobeOutfitRequest>,
) -> AppResult<Json<ApiResponse<GeneratedOutfit>>> {
    let resp = suggestion_service::from_wardrobe(&state, &user, payload).await?;
    Ok(Json(resp))
}
