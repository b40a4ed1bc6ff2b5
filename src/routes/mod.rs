use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod auth;
pub mod doc;
pub mod health;
pub mod images;
pub mod outfits;
pub mod params;
pub mod shopping;
pub mod suggestions;
pub mod wardrobe;
pub mod weather;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/wardrobe", wardrobe::router())
        .nest("/outfits", outfits::router())
        .nest("/ai", suggestions::router())
        .nest("/shopping", shopping::router())
        .route("/weather", get(weather::get_forecast))
        .route("/images/{category}/{color}", get(images::clothing_image))
}

/// Full application router with state applied. Middleware layers are added by the binary.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
