use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    config::AppConfig,
    dto::auth::{AuthResponse, Claims, LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{NewUser, User},
    response::{ApiResponse, Meta},
    state::AppState,
};

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

fn validate_registration(payload: &RegisterRequest) -> AppResult<()> {
    if payload.username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(AppError::BadRequest(format!(
            "username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    let email = payload.email.trim();
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid_email {
        return Err(AppError::BadRequest("email is invalid".into()));
    }
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Sign a `Bearer` token for `user_id`.
pub fn issue_token(config: &AppConfig, user_id: i32) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(config.token_ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        jti: Uuid::new_v4().to_string(),
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(format!("Bearer {}", token))
}

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<AuthResponse>> {
    validate_registration(&payload)?;
    let RegisterRequest {
        username,
        password,
        email,
        name,
    } = payload;
    let username = username.trim().to_string();
    let email = email.trim().to_string();

    if state.storage.get_user_by_username(&username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".into()));
    }
    if state.storage.get_user_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("Email already exists".into()));
    }

    let user = state
        .storage
        .create_user(NewUser {
            username,
            password_hash: hash_password(&password)?,
            email,
            name: name.trim().to_string(),
        })
        .await?;

    let token = issue_token(&state.config, user.id)?;
    log_audit(
        Some(user.id),
        "user_register",
        Some("users"),
        Some(serde_json::json!({ "username": user.username })),
    );

    Ok(ApiResponse::success(
        "User created",
        AuthResponse { user, token },
        None,
    ))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<AuthResponse>> {
    let LoginRequest { username, password } = payload;
    let user = match state.storage.get_user_by_username(username.trim()).await? {
        Some(u) => u,
        None => return Err(AppError::Unauthorized),
    };

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let token = issue_token(&state.config, user.id)?;
    log_audit(Some(user.id), "user_login", Some("users"), None);

    Ok(ApiResponse::success(
        "Logged in",
        AuthResponse { user, token },
        Some(Meta::empty()),
    ))
}

pub async fn logout_user(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<serde_json::Value>> {
    state.revoked.revoke(user.jti, user.expires_at);
    log_audit(Some(user.user_id), "user_logout", Some("users"), None);

    Ok(ApiResponse::success(
        "Logged out successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn current_user(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<User>> {
    let user = state
        .storage
        .get_user(user.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    Ok(ApiResponse::success("Current user", user, None))
}
