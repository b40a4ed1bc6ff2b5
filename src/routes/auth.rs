use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::auth::{AuthResponse, LoginRequest, RegisterRequest},
    error::AppResult,
    extract::AppJson,
    middleware::auth::AuthUser,
    models::User,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Register user", body = ApiResponse<AuthResponse>),
        (status = 400, description = "Invalid registration data"),
        (status = 409, description = "Username or email already exists")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthResponse>>)> {
    let resp = auth_service::register_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user", body = ApiResponse<AuthResponse>),
        (status = 401, description = "Incorrect username or password")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let resp = auth_service::login_user(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Revoke the current token", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = auth_service::logout_user(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<User>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = auth_service::current_user(&state, &user).await?;
    Ok(Json(resp))
}
