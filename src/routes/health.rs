use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub storage: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let data = HealthData {
        status: "ok".to_string(),
        storage: state.storage.backend().to_string(),
    };

    Json(ApiResponse::success(
        "Health check",
        data,
        Some(Meta::empty()),
    ))
}
