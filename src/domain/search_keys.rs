//! Search-filter contract carried inside paging tokens.
//!
//! A filter object is any serde record that also exposes the two reserved
//! paging fields: the 0-based `page` index and the `pageSize`. Those two are
//! owned by [`crate::paging::WebPaging`] and kept in lockstep with its
//! 1-based page number; everything else belongs to the caller.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload key of the reserved 0-based page index.
pub const PAGE_FIELD: &str = "page";
/// Payload key of the reserved page size.
pub const PAGE_SIZE_FIELD: &str = "pageSize";

/// Behaviour required from a search-filter object.
pub trait SearchKeys: Serialize + DeserializeOwned + Clone {
    /// Current page index, starting at 0.
    fn page(&self) -> usize;

    /// Sets the 0-based page index.
    fn set_page(&mut self, page: usize);

    /// Records per page, `0` meaning unbounded.
    fn page_size(&self) -> usize;

    fn set_page_size(&mut self, page_size: usize);

    /// Number of rows a query must skip to reach the current page.
    fn skip_rows(&self) -> usize {
        self.page().saturating_mul(self.page_size())
    }
}

/// Reserved paging fields shared by every typed filter.
///
/// Typed filters embed it with `#[serde(flatten)]` so the payload stays a flat
/// JSON object.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BaseSearchKeys {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
}

impl BaseSearchKeys {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

impl SearchKeys for BaseSearchKeys {
    fn page(&self) -> usize {
        self.page
    }

    fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
    }
}

/// Implements [`SearchKeys`] for a filter by delegating to an embedded
/// [`BaseSearchKeys`] field.
#[macro_export]
macro_rules! search_keys {
    ($name:ty, $field:ident) => {
        impl $crate::domain::search_keys::SearchKeys for $name {
            fn page(&self) -> usize {
                self.$field.page
            }

            fn set_page(&mut self, page: usize) {
                self.$field.page = page;
            }

            fn page_size(&self) -> usize {
                self.$field.page_size
            }

            fn set_page_size(&mut self, page_size: usize) {
                self.$field.page_size = page_size;
            }
        }
    };
}

/// Untyped filter backed by a JSON object.
///
/// Used by tooling that has to read tokens without knowing the filter type.
/// The reserved fields live in the same map under [`PAGE_FIELD`] and
/// [`PAGE_SIZE_FIELD`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DynamicSearchKeys(Map<String, Value>);

impl DynamicSearchKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a caller-defined field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Sets a caller-defined field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn read_usize(&self, name: &str) -> usize {
        self.0
            .get(name)
            .and_then(Value::as_u64)
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(0)
    }
}

impl From<Map<String, Value>> for DynamicSearchKeys {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl SearchKeys for DynamicSearchKeys {
    fn page(&self) -> usize {
        self.read_usize(PAGE_FIELD)
    }

    fn set_page(&mut self, page: usize) {
        self.0.insert(PAGE_FIELD.to_string(), Value::from(page));
    }

    fn page_size(&self) -> usize {
        self.read_usize(PAGE_SIZE_FIELD)
    }

    fn set_page_size(&mut self, page_size: usize) {
        self.0
            .insert(PAGE_SIZE_FIELD.to_string(), Value::from(page_size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_keys_serialize_reserved_names() {
        let keys = BaseSearchKeys::new(2, 25);
        let value = serde_json::to_value(keys).unwrap();

        assert_eq!(value, serde_json::json!({"page": 2, "pageSize": 25}));
    }

    #[test]
    fn skip_rows_multiplies_page_and_size() {
        assert_eq!(BaseSearchKeys::new(3, 20).skip_rows(), 60);
        assert_eq!(BaseSearchKeys::new(3, 0).skip_rows(), 0);
    }

    #[test]
    fn dynamic_keys_read_and_write_reserved_fields() {
        let mut keys = DynamicSearchKeys::new();
        keys.insert("name", "alice");
        assert_eq!(keys.page(), 0);

        keys.set_page(4);
        keys.set_page_size(15);

        assert_eq!(keys.page(), 4);
        assert_eq!(keys.page_size(), 15);
        assert_eq!(keys.get("name"), Some(&Value::from("alice")));
        assert_eq!(keys.get(PAGE_SIZE_FIELD), Some(&Value::from(15)));
    }
}
