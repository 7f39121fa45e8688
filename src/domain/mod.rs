//! Domain primitives for the inventory service.
//!
//! Newtypes and enums that keep raw strings and integers out of the service
//! signatures: item identifiers, roles, and the normalised listing query.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of an inventory item.
///
/// # Examples
///
/// ```rust
/// use stockpile::domain::ItemId;
///
/// let id = ItemId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemId(i32);

impl ItemId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse authorization tag. Only admins may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Viewer,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Viewer => "viewer",
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "viewer" => Ok(Self::Viewer),
            other => Err(format!("Unknown role '{other}', expected 'admin' or 'viewer'")),
        }
    }
}

/// Columns the listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Id,
    Name,
    Quantity,
    Price,
}

impl SortColumn {
    /// Maps a user-supplied column name onto the allow-list, falling back to
    /// [`SortColumn::Id`]. Matching is exact.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => Self::Name,
            Some("quantity") => Self::Quantity,
            Some("price") => Self::Price,
            _ => Self::Id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `asc`/`desc` in any case; anything else is ascending.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// A normalised listing request. `page` is 1-based and never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub sort: SortColumn,
    pub order: SortOrder,
    pub search: String,
}

impl ListQuery {
    /// Row offset for this page, capped at `i64::MAX` since SQLite binds
    /// OFFSET as a signed integer. A capped offset simply yields no rows.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.limit);
        let max = i64::MAX.unsigned_abs();
        if offset > max { max } else { offset }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: crate::constants::inventory::DEFAULT_PAGE_SIZE,
            sort: SortColumn::default(),
            order: SortOrder::default(),
            search: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_column_uses_allow_list() {
        assert_eq!(SortColumn::parse_or_default(Some("name")), SortColumn::Name);
        assert_eq!(SortColumn::parse_or_default(Some("price")), SortColumn::Price);
        assert_eq!(
            SortColumn::parse_or_default(Some("quantity")),
            SortColumn::Quantity
        );
        assert_eq!(SortColumn::parse_or_default(None), SortColumn::Id);
        assert_eq!(
            SortColumn::parse_or_default(Some("name; DROP TABLE inventory")),
            SortColumn::Id
        );
        assert_eq!(SortColumn::parse_or_default(Some("NAME")), SortColumn::Id);
    }

    #[test]
    fn sort_order_is_case_insensitive() {
        assert_eq!(SortOrder::parse_or_default(Some("DESC")), SortOrder::Descending);
        assert_eq!(SortOrder::parse_or_default(Some("desc")), SortOrder::Descending);
        assert_eq!(SortOrder::parse_or_default(Some("asc")), SortOrder::Ascending);
        assert_eq!(SortOrder::parse_or_default(Some("sideways")), SortOrder::Ascending);
        assert!(SortOrder::parse_or_default(None).is_ascending());
    }

    #[test]
    fn offset_is_zero_based() {
        let query = ListQuery {
            page: 3,
            limit: 5,
            ..ListQuery::default()
        };
        assert_eq!(query.offset(), 10);
        assert_eq!(ListQuery::default().offset(), 0);
    }

    #[test]
    fn offset_never_exceeds_signed_range() {
        let query = ListQuery {
            page: u64::MAX,
            limit: 100,
            ..ListQuery::default()
        };
        assert_eq!(query.offset(), i64::MAX.unsigned_abs());

        let query = ListQuery {
            page: 92_233_720_368_547_759,
            limit: 100,
            ..ListQuery::default()
        };
        assert_eq!(query.offset(), 9_223_372_036_854_775_800);
    }

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" Viewer ".parse::<Role>(), Ok(Role::Viewer));
        assert!("root".parse::<Role>().is_err());
        assert_eq!(Role::Admin.to_string(), "admin");
        assert!(!Role::default().is_admin());
    }
}
