//! Domain service for inventory management.
//!
//! Handlers talk to this trait instead of the store; storage failures and
//! missing rows arrive as one typed error.

use thiserror::Error;

use crate::domain::{ItemId, ListQuery};
use crate::models::{InventoryItem, ItemDraft, ItemPage};

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Item {0} not found")]
    NotFound(ItemId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for InventoryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Outcome of a bulk insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkInsertReport {
    pub inserted: u64,
    /// Positions in the submitted batch that failed validation.
    pub skipped: Vec<usize>,
}

#[async_trait::async_trait]
pub trait InventoryService: Send + Sync {
    /// Returns one page of items plus the total number of matches.
    async fn list_items(&self, query: &ListQuery) -> Result<ItemPage, InventoryError>;

    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if no item has the id.
    async fn get_item(&self, id: ItemId) -> Result<InventoryItem, InventoryError>;

    async fn create_item(&self, draft: ItemDraft) -> Result<InventoryItem, InventoryError>;

    /// Overwrites every field of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if no item has the id; nothing is
    /// created in that case.
    async fn update_item(
        &self,
        id: ItemId,
        draft: ItemDraft,
    ) -> Result<InventoryItem, InventoryError>;

    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if no item has the id.
    async fn delete_item(&self, id: ItemId) -> Result<(), InventoryError>;

    /// Inserts every `Some` entry atomically and reports the positions of the
    /// `None` ones, which the caller already rejected.
    async fn bulk_create(
        &self,
        entries: Vec<Option<ItemDraft>>,
    ) -> Result<BulkInsertReport, InventoryError>;

    /// Items whose quantity is strictly below the configured threshold.
    async fn low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError>;
}
