use serde_json::Value;

use super::{ApiError, ItemPayload, ListParams};
use crate::config::InventoryConfig;
use crate::domain::{ListQuery, SortColumn, SortOrder};
use crate::models::{DraftError, ItemDraft};

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        Self::validation(err.to_string())
    }
}

/// `None` for absent, null or blank values.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    })
}

fn parse_quantity(value: &Value) -> Result<i64, DraftError> {
    let as_integer = |f: f64| -> Option<i64> {
        let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&f);
        #[allow(clippy::cast_possible_truncation)]
        let truncated = f as i64;
        (f.fract() == 0.0 && in_range).then_some(truncated)
    };

    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(as_integer)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(as_integer))
        }
        _ => None,
    };

    parsed.ok_or(DraftError::InvalidQuantity)
}

fn parse_price(value: &Value) -> Result<f64, DraftError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or(DraftError::InvalidPrice)
}

/// Turns a raw body into a validated draft. All three fields must be
/// present before either number is looked at.
pub fn parse_item_payload(payload: &ItemPayload) -> Result<ItemDraft, DraftError> {
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (Some(name), Some(quantity), Some(price)) = (
        name,
        present(payload.quantity.as_ref()),
        present(payload.price.as_ref()),
    ) else {
        return Err(DraftError::MissingField);
    };

    let quantity = parse_quantity(quantity)?;
    let price = parse_price(price)?;

    ItemDraft::new(name, quantity, price)
}

/// A bulk entry that is not even an object counts as invalid.
pub fn parse_bulk_entry(entry: Value) -> Option<ItemDraft> {
    let payload: ItemPayload = serde_json::from_value(entry).ok()?;
    parse_item_payload(&payload).ok()
}

/// Normalises listing parameters. Unparseable values fall back to defaults,
/// `limit` is clamped to `[1, max_page_size]`.
pub fn list_query(params: ListParams, config: &InventoryConfig) -> ListQuery {
    let page = params
        .page
        .as_deref()
        .and_then(|p| p.trim().parse::<u64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);

    let limit = params
        .limit
        .as_deref()
        .and_then(|l| l.trim().parse::<u64>().ok())
        .filter(|l| *l >= 1)
        .unwrap_or(config.default_page_size)
        .min(config.max_page_size);

    ListQuery {
        page,
        limit,
        sort: SortColumn::parse_or_default(params.sort.as_deref()),
        order: SortOrder::parse_or_default(params.order.as_deref()),
        search: params.search.unwrap_or_default(),
    }
}
