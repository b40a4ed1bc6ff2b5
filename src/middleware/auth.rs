use axum::{extract::FromRequestParts, http::header};
use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::{dto::auth::Claims, error::AppError, state::AppState};

/// The authenticated caller, resolved from a `Bearer` token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub jti: Uuid,
    pub expires_at: DateTime<Utc>,
}

pub fn ensure_owner(user: &AuthUser, owner_id: i32) -> Result<(), AppError> {
    if user.user_id != owner_id {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_str = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or(AppError::Unauthorized)?;

        let claims = decode_token(token, &state.config.jwt_secret)?;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AppError::Unauthorized)?;
        let jti = Uuid::parse_str(&claims.jti).map_err(|_| AppError::Unauthorized)?;

        if state.revoked.is_revoked(&jti) {
            return Err(AppError::Unauthorized);
        }

        let expires_at =
            DateTime::<Utc>::from_timestamp(claims.exp as i64, 0).ok_or(AppError::Unauthorized)?;

        Ok(AuthUser {
            user_id,
            jti,
            expires_at,
        })
    }
}
