//! `SeaORM` implementation of the `InventoryService` trait.

use crate::db::Store;
use crate::domain::{ItemId, ListQuery};
use crate::models::{InventoryItem, ItemDraft, ItemPage};
use crate::services::inventory_service::{BulkInsertReport, InventoryError, InventoryService};
use async_trait::async_trait;

pub struct SeaOrmInventoryService {
    store: Store,
    low_stock_threshold: i32,
}

impl SeaOrmInventoryService {
    #[must_use]
    pub const fn new(store: Store, low_stock_threshold: i32) -> Self {
        Self {
            store,
            low_stock_threshold,
        }
    }
}

#[async_trait]
impl InventoryService for SeaOrmInventoryService {
    async fn list_items(&self, query: &ListQuery) -> Result<ItemPage, InventoryError> {
        let (items, total) = self.store.list_items(query).await?;
        Ok(ItemPage { items, total })
    }

    async fn get_item(&self, id: ItemId) -> Result<InventoryItem, InventoryError> {
        self.store
            .get_item(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    async fn create_item(&self, draft: ItemDraft) -> Result<InventoryItem, InventoryError> {
        Ok(self.store.add_item(&draft).await?)
    }

    async fn update_item(
        &self,
        id: ItemId,
        draft: ItemDraft,
    ) -> Result<InventoryItem, InventoryError> {
        if !self.store.update_item(id, &draft).await? {
            return Err(InventoryError::NotFound(id));
        }

        Ok(InventoryItem::from_draft(id, draft))
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), InventoryError> {
        if self.store.remove_item(id).await? {
            tracing::info!(%id, "Deleted inventory item");
            Ok(())
        } else {
            Err(InventoryError::NotFound(id))
        }
    }

    async fn bulk_create(
        &self,
        entries: Vec<Option<ItemDraft>>,
    ) -> Result<BulkInsertReport, InventoryError> {
        let mut drafts = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                Some(draft) => drafts.push(draft),
                None => skipped.push(index),
            }
        }

        if !skipped.is_empty() {
            tracing::warn!(?skipped, "Skipping invalid bulk entries");
        }

        let inserted = if drafts.is_empty() {
            0
        } else {
            self.store.add_items_batch(&drafts).await?
        };

        Ok(BulkInsertReport { inserted, skipped })
    }

    async fn low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        Ok(self.store.low_stock_items(self.low_stock_threshold).await?)
    }
}
