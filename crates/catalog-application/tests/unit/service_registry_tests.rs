//! Tests for the service registry

use catalog_application::registry::{Component, RegistryError, ServiceRegistry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

#[test]
fn resolves_registered_value() {
    let registry = ServiceRegistry::new();
    registry.register("tableName", "products".to_string());

    let component = registry.resolve("tableName").expect("registered");
    assert_eq!(
        component.downcast_ref::<String>().map(String::as_str),
        Some("products")
    );
}

#[test]
fn unknown_key_is_absent() {
    let registry = ServiceRegistry::new();
    assert!(registry.resolve("missing").is_none());
    assert!(!registry.contains("missing"));
}

#[test]
fn registering_twice_keeps_the_latest_value() {
    let registry = ServiceRegistry::new();
    registry.register("k", 1_u32);
    registry.register("k", 2_u32);

    let value: u32 = registry.resolve_as("k").unwrap();
    assert_eq!(value, 2);
    assert_eq!(registry.len(), 1);
}

#[test]
fn resolve_as_narrows_trait_objects() {
    let registry = ServiceRegistry::new();
    registry.register("greeter", Arc::new(English) as Arc<dyn Greeter>);

    let greeter: Arc<dyn Greeter> = registry.resolve_as("greeter").unwrap();
    assert_eq!(greeter.greet(), "hello");
}

#[test]
fn resolve_as_reports_missing_key() {
    let registry = ServiceRegistry::new();
    let err = registry.resolve_as::<String>("db").unwrap_err();

    assert!(matches!(err, RegistryError::NotFound { ref key } if key == "db"));
    assert!(err.is_not_found());
    assert_eq!(err.subject(), "db");
}

#[test]
fn resolve_as_reports_type_mismatch() {
    let registry = ServiceRegistry::new();
    registry.register("db", 42_i64);

    let err = registry.resolve_as::<String>("db").unwrap_err();
    match err {
        RegistryError::TypeMismatch { key, expected } => {
            assert_eq!(key, "db");
            assert!(expected.contains("String"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolve_returns_the_shared_instance() {
    let registry = ServiceRegistry::new();
    registry.register("greeter", Arc::new(English) as Arc<dyn Greeter>);

    let first = registry.resolve("greeter").unwrap();
    let second = registry.resolve("greeter").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn keys_are_sorted() {
    let registry = ServiceRegistry::new();
    registry.register("b", ());
    registry.register("a", ());
    registry.register("c", ());

    assert_eq!(registry.keys(), ["a", "b", "c"]);
    assert!(!registry.is_empty());
}

#[test]
fn concurrent_registration_and_lookup() {
    let registry = Arc::new(ServiceRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("w{worker}-{i}");
                    registry.register(key.clone(), i);
                    let value: i32 = registry.resolve_as(&key).unwrap();
                    assert_eq!(value, i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(registry.len(), 800);
}

#[test]
fn registering_a_component_stores_it_unwrapped() {
    let registry = ServiceRegistry::new();
    let component: Component = Arc::new(7_u64);
    registry.register("seven", Arc::clone(&component));

    assert!(Arc::ptr_eq(&registry.resolve("seven").unwrap(), &component));
    assert_eq!(registry.resolve_as::<u64>("seven").unwrap(), 7);
}

#[test]
fn readers_see_only_keys_whose_registration_returned() {
    const WRITERS: usize = 4;
    const READERS: usize = 4;
    const KEYS_PER_WRITER: usize = 200;

    let registry = Arc::new(ServiceRegistry::new());
    let done: Arc<Vec<AtomicBool>> = Arc::new(
        (0..WRITERS * KEYS_PER_WRITER)
            .map(|_| AtomicBool::new(false))
            .collect(),
    );
    let start = Arc::new(Barrier::new(WRITERS + READERS));

    let writers: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let registry = Arc::clone(&registry);
            let done = Arc::clone(&done);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                for i in 0..KEYS_PER_WRITER {
                    let slot = writer * KEYS_PER_WRITER + i;
                    registry.register(format!("key-{slot}"), slot);
                    done[slot].store(true, Ordering::SeqCst);
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..READERS)
        .map(|reader| {
            let registry = Arc::clone(&registry);
            let done = Arc::clone(&done);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                for round in 0..KEYS_PER_WRITER * 2 {
                    assert!(registry.resolve(&format!("ghost-{reader}-{round}")).is_none());
                    assert!(registry.resolve_as::<usize>("never").is_err());

                    for slot in (round % 7..done.len()).step_by(7) {
                        let completed = done[slot].load(Ordering::SeqCst);
                        match registry.resolve_as::<usize>(&format!("key-{slot}")) {
                            Ok(value) => assert_eq!(value, slot),
                            Err(err) => {
                                assert!(!completed, "key-{slot} missing after register returned");
                                assert!(matches!(err, RegistryError::NotFound { .. }));
                            }
                        }
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), WRITERS * KEYS_PER_WRITER);
    assert!(registry.resolve("never").is_none());
}
