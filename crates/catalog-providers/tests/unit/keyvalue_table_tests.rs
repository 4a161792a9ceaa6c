//! Tests for the in-memory key-value table

use catalog_domain::Error;
use catalog_providers::keyvalue::{InMemoryTable, Item, KeyValueTable};
use serde_json::json;

fn item(id: &str, name: &str) -> Item {
    match json!({ "id": id, "name": name }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn put_then_get() {
    let table = InMemoryTable::new();
    table.put_item("products", item("a", "Mug")).await.unwrap();

    let stored = table.get_item("products", "a").await.unwrap().unwrap();
    assert_eq!(stored["name"], "Mug");
    assert!(table.get_item("products", "b").await.unwrap().is_none());
}

#[tokio::test]
async fn put_replaces_existing_item() {
    let table = InMemoryTable::new();
    table.put_item("products", item("a", "Mug")).await.unwrap();
    table.put_item("products", item("a", "Cup")).await.unwrap();

    let stored = table.get_item("products", "a").await.unwrap().unwrap();
    assert_eq!(stored["name"], "Cup");
    assert_eq!(table.item_count("products"), 1);
}

#[tokio::test]
async fn put_requires_an_id() {
    let table = InMemoryTable::new();
    let mut no_id = item("a", "Mug");
    no_id.remove("id");

    let err = table.put_item("products", no_id).await.unwrap_err();
    assert!(matches!(err, Error::Repository { .. }));

    let err = table.put_item("products", item("", "Mug")).await.unwrap_err();
    assert!(matches!(err, Error::Repository { .. }));
}

#[tokio::test]
async fn scan_is_ordered_by_key() {
    let table = InMemoryTable::new();
    for id in ["c", "a", "b"] {
        table.put_item("products", item(id, id)).await.unwrap();
    }

    let ids: Vec<String> = table
        .scan("products")
        .await
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[tokio::test]
async fn tables_are_isolated() {
    let table = InMemoryTable::new();
    table.put_item("products", item("a", "Mug")).await.unwrap();

    assert!(table.scan("archive").await.unwrap().is_empty());
    assert!(table.get_item("archive", "a").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let table = InMemoryTable::new();
    table.put_item("products", item("a", "Mug")).await.unwrap();

    table.delete_item("products", "a").await.unwrap();
    table.delete_item("products", "a").await.unwrap();
    table.delete_item("missing-table", "a").await.unwrap();
    assert_eq!(table.item_count("products"), 0);
}

#[tokio::test]
async fn clones_share_storage() {
    let table = InMemoryTable::new();
    let clone = table.clone();
    clone.put_item("products", item("a", "Mug")).await.unwrap();

    assert_eq!(table.item_count("products"), 1);
}
