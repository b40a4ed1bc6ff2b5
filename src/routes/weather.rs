use axum::{
    Json,
    extract::State,
};

use crate::{
    dto::weather::{WeatherForecast, WeatherQuery},
    extract::AppQuery,
    response::{ApiResponse, Meta},
    services::weather_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Three-day forecast", body = ApiResponse<WeatherForecast>)
    ),
    tag = "Weather"
)]
pub async fn get_forecast(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<WeatherQuery>,
) -> Json<ApiResponse<WeatherForecast>> {
    let forecast = weather_service::forecast(&query, state.config.weather_api_key.as_deref());
    Json(ApiResponse::success(
        "Weather forecast",
        forecast,
        Some(Meta::empty()),
    ))
}
