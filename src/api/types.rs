use serde::{Deserialize, Serialize};

use crate::models::InventoryItem;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Raw create/update body. Numbers may arrive as JSON numbers or as numeric
/// strings, so they are kept untyped until validation.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<serde_json::Value>,
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

/// Listing query string; everything is optional and parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BulkInsertResponse {
    pub message: String,
    pub inserted: u64,
    pub skipped: Vec<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockResponse {
    pub low_stock: Vec<InventoryItem>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub uptime_seconds: u64,
    pub version: &'static str,
}
