//! Key-value table port and in-memory backend

use async_trait::async_trait;
use catalog_domain::error::{Error, Result};
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::sync::Arc;

/// One stored item: attribute name to JSON value
pub type Item = Map<String, Value>;

/// Attribute every item is keyed by
pub const KEY_ATTRIBUTE: &str = "id";

/// Minimal item store addressed by table name and key
///
/// Modeled on put/get/scan/delete document stores. Missing tables behave as
/// empty.
#[async_trait]
pub trait KeyValueTable: Send + Sync {
    /// Insert or replace `item` under its `"id"` attribute
    async fn put_item(&self, table: &str, item: Item) -> Result<()>;

    /// Fetch the item stored under `key`
    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>>;

    /// Every item in `table`
    async fn scan(&self, table: &str) -> Result<Vec<Item>>;

    /// Remove the item under `key`; absent keys are not an error
    async fn delete_item(&self, table: &str, key: &str) -> Result<()>;
}

/// Concurrent in-memory [`KeyValueTable`]
///
/// Data lives only as long as the value. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryTable {
    tables: Arc<DashMap<String, DashMap<String, Item>>>,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in `table`
    pub fn item_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, |items| items.len())
    }
}

fn item_key(item: &Item) -> Result<String> {
    item.get(KEY_ATTRIBUTE)
        .and_then(Value::as_str)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::repository(format!("item has no string '{KEY_ATTRIBUTE}' attribute")))
}

#[async_trait]
impl KeyValueTable for InMemoryTable {
    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        let key = item_key(&item)?;
        self.tables
            .entry(table.to_string())
            .or_default()
            .insert(key, item);
        Ok(())
    }

    async fn get_item(&self, table: &str, key: &str) -> Result<Option<Item>> {
        Ok(self
            .tables
            .get(table)
            .and_then(|items| items.get(key).map(|item| item.value().clone())))
    }

    async fn scan(&self, table: &str) -> Result<Vec<Item>> {
        let Some(items) = self.tables.get(table) else {
            return Ok(Vec::new());
        };
        let mut entries: Vec<(String, Item)> = items
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries.into_iter().map(|(_, item)| item).collect())
    }

    async fn delete_item(&self, table: &str, key: &str) -> Result<()> {
        if let Some(items) = self.tables.get(table) {
            items.remove(key);
        }
        Ok(())
    }
}
