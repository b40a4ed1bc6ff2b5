use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub jti: String,
    pub exp: usize,
}
