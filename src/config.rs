use std::env;

const DEV_JWT_SECRET: &str = "styler-app-secret";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub weather_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };
        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|h| h.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(24);
        let weather_api_key = env::var("WEATHER_API_KEY").ok().filter(|v| !v.is_empty());
        Ok(Self {
            port,
            database_url,
            host,
            jwt_secret,
            token_ttl_hours,
            weather_api_key,
        })
    }

    /// Configuration for tests and local tooling: in-memory storage, dev secret.
    pub fn for_tests() -> Self {
        Self {
            database_url: None,
            host: "127.0.0.1".to_string(),
            port: 0,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_hours: 24,
            weather_api_key: None,
        }
    }
}
