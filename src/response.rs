use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Paging details attached to list responses.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    /// A complete listing returned as a single page.
    pub fn unpaged(total: usize) -> Self {
        let total = total as i64;
        Self::new(1, total.max(1), total)
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

/// Envelope shared by every JSON endpoint, errors included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
