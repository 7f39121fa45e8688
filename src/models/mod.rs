pub mod item;

pub use item::{DraftError, InventoryItem, ItemDraft, ItemPage};
