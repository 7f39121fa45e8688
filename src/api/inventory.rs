use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use std::sync::Arc;

use super::auth::require_admin;
use super::validation::{list_query, parse_bulk_entry, parse_item_payload};
use super::{ApiError, AppState, BulkInsertResponse, ItemPayload, ListParams, LowStockResponse};
use crate::domain::ItemId;
use crate::models::{InventoryItem, ItemPage};
use crate::services::Identity;

/// GET /api/inventory
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ItemPage>, ApiError> {
    let query = list_query(params, &state.config().inventory);
    let page = state.inventory_service().list_items(&query).await?;
    Ok(Json(page))
}

/// GET /api/inventory/{id}
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<InventoryItem>, ApiError> {
    let Path(id) = id?;
    let item = state.inventory_service().get_item(ItemId::new(id)).await?;
    Ok(Json(item))
}

/// POST /api/inventory
///
/// Admin only. The role is checked before the body is looked at, so a viewer
/// gets `403` even for a malformed payload.
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&identity)?;
    let Json(payload) = payload?;

    let draft = parse_item_payload(&payload)?;
    let item = state.inventory_service().create_item(draft).await?;

    tracing::info!(item_id = item.id, username = %identity.username, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/inventory/{id}
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<InventoryItem>, ApiError> {
    require_admin(&identity)?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let draft = parse_item_payload(&payload)?;
    let item = state
        .inventory_service()
        .update_item(ItemId::new(id), draft)
        .await?;

    tracing::info!(item_id = id, username = %identity.username, "Item updated");

    Ok(Json(item))
}

/// DELETE /api/inventory/{id}
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    require_admin(&identity)?;
    let Path(id) = id?;

    state
        .inventory_service()
        .delete_item(ItemId::new(id))
        .await?;

    tracing::info!(item_id = id, username = %identity.username, "Item deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/inventory/bulk
///
/// Body is a JSON array of item objects. Entries that fail validation are
/// skipped and reported by position; the valid ones go in as one batch.
pub async fn bulk_create(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BulkInsertResponse>, ApiError> {
    require_admin(&identity)?;
    let Json(payload) = payload?;

    let entries = match payload {
        Value::Array(entries) if !entries.is_empty() => entries,
        _ => return Err(ApiError::validation("Items must be a non-empty array")),
    };

    let drafts = entries.into_iter().map(parse_bulk_entry).collect();
    let report = state.inventory_service().bulk_create(drafts).await?;

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped.len(),
        username = %identity.username,
        "Bulk insert finished"
    );

    Ok(Json(BulkInsertResponse {
        message: format!("Successfully inserted {} items", report.inserted),
        inserted: report.inserted,
        skipped: report.skipped,
    }))
}

/// GET /api/inventory/analytics
pub async fn analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LowStockResponse>, ApiError> {
    let low_stock = state.inventory_service().low_stock().await?;
    Ok(Json(LowStockResponse { low_stock }))
}
