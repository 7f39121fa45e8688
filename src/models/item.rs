use serde::Serialize;
use thiserror::Error;

use crate::domain::ItemId;
use crate::entities::inventory;

/// A stored inventory row as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl InventoryItem {
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        ItemId::new(self.id)
    }

    #[must_use]
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id: id.value(),
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
        }
    }
}

impl From<inventory::Model> for InventoryItem {
    fn from(model: inventory::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            price: model.price,
        }
    }
}

/// Why a candidate item was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("All fields are required")]
    MissingField,

    #[error("Quantity must be a non-negative number")]
    InvalidQuantity,

    #[error("Price must be a positive number")]
    InvalidPrice,
}

/// Field values that passed validation: non-empty name, quantity >= 0,
/// finite price > 0. The only way to build one is [`ItemDraft::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    name: String,
    quantity: i32,
    price: f64,
}

impl ItemDraft {
    pub fn new(name: &str, quantity: i64, price: f64) -> Result<Self, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingField);
        }

        let quantity = i32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 0)
            .ok_or(DraftError::InvalidQuantity)?;

        if !price.is_finite() || price <= 0.0 {
            return Err(DraftError::InvalidPrice);
        }

        Ok(Self {
            name: name.to_string(),
            quantity,
            price,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }
}

/// One page of a listing plus the size of the full filtered set.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPage {
    pub items: Vec<InventoryItem>,
    pub total: u64,
}
