use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::{config::AppConfig, storage::Storage};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: Arc<AppConfig>,
    pub revoked: Arc<RevokedTokens>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, config: AppConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
            revoked: Arc::new(RevokedTokens::default()),
        }
    }
}

/// Token ids invalidated by logout, kept until the token would expire anyway.
#[derive(Default)]
pub struct RevokedTokens {
    tokens: Mutex<HashMap<Uuid, DateTime<Utc>>>,
}

impl RevokedTokens {
    pub fn revoke(&self, jti: Uuid, expires_at: DateTime<Utc>) {
        let now = Utc::now();
        let mut tokens = self.tokens.lock();
        tokens.retain(|_, exp| *exp > now);
        tokens.insert(jti, expires_at);
    }

    pub fn is_revoked(&self, jti: &Uuid) -> bool {
        self.tokens.lock().contains_key(jti)
    }
}
