use crate::domain::{ItemId, ListQuery, SortColumn};
use crate::entities::{inventory, prelude::*};
use crate::models::{InventoryItem, ItemDraft};
use anyhow::{Context, Result};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use tracing::info;

/// Repository for inventory rows
pub struct InventoryRepository {
    conn: DatabaseConnection,
}

impl InventoryRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn sort_column(column: SortColumn) -> inventory::Column {
        match column {
            SortColumn::Id => inventory::Column::Id,
            SortColumn::Name => inventory::Column::Name,
            SortColumn::Quantity => inventory::Column::Quantity,
            SortColumn::Price => inventory::Column::Price,
        }
    }

    fn active_model(draft: &ItemDraft) -> inventory::ActiveModel {
        inventory::ActiveModel {
            name: Set(draft.name().to_string()),
            quantity: Set(draft.quantity()),
            price: Set(draft.price()),
            ..Default::default()
        }
    }

    /// Rows whose name contains `search` literally; LIKE wildcards in the
    /// input are escaped.
    fn matching(search: &str) -> Select<Inventory> {
        let query = Inventory::find();
        if search.is_empty() {
            return query;
        }

        let pattern = format!("%{}%", escape_like(search));
        query.filter(inventory::Column::Name.like(LikeExpr::new(pattern).escape('\\')))
    }

    /// Returns one page of the filtered set and the size of the whole set.
    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<InventoryItem>, u64)> {
        let total = Self::matching(&query.search)
            .count(&self.conn)
            .await
            .context("Failed to count inventory items")?;

        let order = if query.order.is_ascending() {
            Order::Asc
        } else {
            Order::Desc
        };

        let mut select = Self::matching(&query.search).order_by(Self::sort_column(query.sort), order);
        if query.sort != SortColumn::Id {
            // Tie-breaker so pages never overlap.
            select = select.order_by_asc(inventory::Column::Id);
        }

        let rows = select
            .limit(query.limit)
            .offset(query.offset())
            .all(&self.conn)
            .await
            .context("Failed to fetch inventory page")?;

        Ok((rows.into_iter().map(InventoryItem::from).collect(), total))
    }

    pub async fn get(&self, id: ItemId) -> Result<Option<InventoryItem>> {
        let row = Inventory::find_by_id(id.value())
            .one(&self.conn)
            .await
            .context("Failed to query inventory item")?;

        Ok(row.map(InventoryItem::from))
    }

    pub async fn create(&self, draft: &ItemDraft) -> Result<InventoryItem> {
        let model = Self::active_model(draft)
            .insert(&self.conn)
            .await
            .context("Failed to insert inventory item")?;

        info!(id = model.id, name = %model.name, "Added inventory item");
        Ok(InventoryItem::from(model))
    }

    /// Returns `false` when no row has the id.
    pub async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<bool> {
        let result = Inventory::update_many()
            .col_expr(
                inventory::Column::Name,
                sea_orm::sea_query::Expr::value(draft.name()),
            )
            .col_expr(
                inventory::Column::Quantity,
                sea_orm::sea_query::Expr::value(draft.quantity()),
            )
            .col_expr(
                inventory::Column::Price,
                sea_orm::sea_query::Expr::value(draft.price()),
            )
            .filter(inventory::Column::Id.eq(id.value()))
            .exec(&self.conn)
            .await
            .context("Failed to update inventory item")?;

        Ok(result.rows_affected > 0)
    }

    /// Returns `false` when no row has the id.
    pub async fn remove(&self, id: ItemId) -> Result<bool> {
        let result = Inventory::delete_by_id(id.value())
            .exec(&self.conn)
            .await
            .context("Failed to delete inventory item")?;

        Ok(result.rows_affected > 0)
    }

    /// Inserts every draft inside one transaction. Any failure rolls the
    /// whole batch back.
    pub async fn insert_batch(&self, drafts: &[ItemDraft]) -> Result<u64> {
        let txn = self
            .conn
            .begin()
            .await
            .context("Failed to start bulk insert transaction")?;

        let mut inserted = 0;
        for draft in drafts {
            Self::active_model(draft)
                .insert(&txn)
                .await
                .with_context(|| format!("Failed to insert '{}' during bulk insert", draft.name()))?;
            inserted += 1;
        }

        txn.commit()
            .await
            .context("Failed to commit bulk insert")?;

        info!(inserted, "Bulk inserted inventory items");
        Ok(inserted)
    }

    pub async fn below_quantity(&self, threshold: i32) -> Result<Vec<InventoryItem>> {
        let rows = Inventory::find()
            .filter(inventory::Column::Quantity.lt(threshold))
            .order_by_asc(inventory::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to query low stock items")?;

        Ok(rows.into_iter().map(InventoryItem::from).collect())
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
