//! Tests for the recipe-based factory

use catalog_application::registry::{
    Dependencies, Recipe, RecipeFactory, RegistryError, ServiceRegistry,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug)]
struct Db {
    url: String,
}

#[derive(Debug)]
struct Repo {
    db: Arc<Db>,
}

#[derive(Debug)]
struct Service {
    repo: Arc<Repo>,
}

fn setup() -> (Arc<ServiceRegistry>, RecipeFactory) {
    let registry = Arc::new(ServiceRegistry::new());
    let factory = RecipeFactory::new(Arc::clone(&registry));
    (registry, factory)
}

fn repo_recipe(calls: Arc<AtomicUsize>) -> Recipe {
    Recipe::new(["db"], move |deps: &Dependencies| {
        calls.fetch_add(1, Ordering::SeqCst);
        let db: Arc<Db> = deps.get("db")?;
        Ok(Arc::new(Repo { db }))
    })
}

fn service_recipe(calls: Arc<AtomicUsize>) -> Recipe {
    Recipe::new(["Repo"], move |deps: &Dependencies| {
        calls.fetch_add(1, Ordering::SeqCst);
        let repo: Arc<Repo> = deps.get("Repo")?;
        Ok(Arc::new(Service { repo }))
    })
}

#[test]
fn unknown_recipe_is_reported() {
    let (_, factory) = setup();
    let err = factory.create("Nope").unwrap_err();

    assert!(matches!(err, RegistryError::RecipeNotFound { ref name } if name == "Nope"));
    assert_eq!(err.to_string(), "recipe not found: Nope");
}

#[test]
fn missing_dependency_skips_the_builder() {
    let (_, factory) = setup();
    let calls = Arc::new(AtomicUsize::new(0));
    factory.register_recipe("Repo", repo_recipe(Arc::clone(&calls)));

    let err = factory.create("Repo").unwrap_err();
    match &err {
        RegistryError::DependencyNotFound { recipe, key } => {
            assert_eq!(recipe, "Repo");
            assert_eq!(key, "db");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("dependency not found: db"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn recipe_missing_and_dependency_missing_are_distinct() {
    let (_, factory) = setup();
    factory.register_recipe("Repo", repo_recipe(Arc::new(AtomicUsize::new(0))));

    let no_recipe = factory.create("Service").unwrap_err();
    let no_dependency = factory.create("Repo").unwrap_err();

    assert!(matches!(no_recipe, RegistryError::RecipeNotFound { .. }));
    assert!(matches!(
        no_dependency,
        RegistryError::DependencyNotFound { .. }
    ));
}

#[test]
fn dependencies_are_not_built_recursively() {
    let (registry, factory) = setup();
    let repo_calls = Arc::new(AtomicUsize::new(0));
    let service_calls = Arc::new(AtomicUsize::new(0));
    registry.register("db", Arc::new(Db { url: "mem".into() }));
    factory.register_recipe("Repo", repo_recipe(Arc::clone(&repo_calls)));
    factory.register_recipe("Service", service_recipe(Arc::clone(&service_calls)));

    let err = factory.create("Service").unwrap_err();

    assert!(matches!(
        err,
        RegistryError::DependencyNotFound { ref key, .. } if key == "Repo"
    ));
    assert_eq!(repo_calls.load(Ordering::SeqCst), 0);
    assert_eq!(service_calls.load(Ordering::SeqCst), 0);
    assert!(!registry.contains("Repo"));
}

#[test]
fn create_does_not_publish() {
    let (registry, factory) = setup();
    registry.register("db", Arc::new(Db { url: "mem".into() }));
    factory.register_recipe("Repo", repo_recipe(Arc::new(AtomicUsize::new(0))));

    factory.create("Repo").unwrap();
    assert!(!registry.contains("Repo"));
}

#[test]
fn each_create_builds_a_fresh_component() {
    let (registry, factory) = setup();
    let calls = Arc::new(AtomicUsize::new(0));
    registry.register("db", Arc::new(Db { url: "mem".into() }));
    factory.register_recipe("Repo", repo_recipe(Arc::clone(&calls)));

    let first: Arc<Repo> = factory.create_as("Repo").unwrap();
    let second: Arc<Repo> = factory.create_as("Repo").unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.db, &second.db));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn builder_failure_is_wrapped() {
    let (registry, factory) = setup();
    registry.register("db", Arc::new(Db { url: String::new() }));
    factory.register_recipe(
        "Repo",
        Recipe::new(["db"], |deps: &Dependencies| {
            let db: Arc<Db> = deps.get("db")?;
            if db.url.is_empty() {
                return Err("empty connection url".into());
            }
            Ok(Arc::new(Repo { db }))
        }),
    );

    let err = factory.create("Repo").unwrap_err();
    assert!(matches!(err, RegistryError::Builder { ref recipe, .. } if recipe == "Repo"));
    assert_eq!(err.to_string(), "failed to build Repo: empty connection url");
}

#[test]
fn wrong_dependency_type_fails_inside_the_builder() {
    let (registry, factory) = setup();
    registry.register("db", "not a db".to_string());
    factory.register_recipe("Repo", repo_recipe(Arc::new(AtomicUsize::new(0))));

    let err = factory.create("Repo").unwrap_err();
    assert!(matches!(err, RegistryError::Builder { .. }));
    assert!(err.to_string().contains("dependency db is not a"));
}

#[test]
fn builder_sees_only_declared_dependencies() {
    let (registry, factory) = setup();
    registry.register("db", Arc::new(Db { url: "mem".into() }));
    registry.register("secret", 7_u8);
    factory.register_recipe(
        "Peek",
        Recipe::new(["db"], |deps: &Dependencies| {
            assert_eq!(deps.len(), 1);
            assert!(deps.contains("db"));
            let secret: u8 = deps.get("secret")?;
            Ok(secret)
        }),
    );

    let err = factory.create("Peek").unwrap_err();
    assert!(err.to_string().contains("was not declared"));
}

#[test]
fn recipe_without_dependencies_builds_directly() {
    let (_, factory) = setup();
    factory.register_recipe(
        "Answer",
        Recipe::new(Vec::<String>::new(), |deps: &Dependencies| {
            assert!(deps.is_empty());
            Ok(42_u32)
        }),
    );

    let answer: u32 = factory.create_as("Answer").unwrap();
    assert_eq!(answer, 42);
}

#[test]
fn re_registering_a_recipe_replaces_it() {
    let (_, factory) = setup();
    factory.register_recipe("N", Recipe::new(Vec::<String>::new(), |_: &Dependencies| Ok(1_u32)));
    factory.register_recipe("N", Recipe::new(Vec::<String>::new(), |_: &Dependencies| Ok(2_u32)));

    assert_eq!(factory.create_as::<u32>("N").unwrap(), 2);
    assert_eq!(factory.recipe_names(), ["N"]);
    assert!(factory.has_recipe("N"));
}

#[test]
fn layered_build_in_dependency_order() {
    let (registry, factory) = setup();
    registry.register("db", Arc::new(Db { url: "postgres://catalog".into() }));
    factory.register_recipe("Service", service_recipe(Arc::new(AtomicUsize::new(0))));
    factory.register_recipe("Repo", repo_recipe(Arc::new(AtomicUsize::new(0))));

    for name in ["Repo", "Service"] {
        let component = factory.create(name).unwrap();
        registry.register_component(name, component);
    }

    let service: Arc<Service> = registry.resolve_as("Service").unwrap();
    let repo: Arc<Repo> = registry.resolve_as("Repo").unwrap();
    assert!(Arc::ptr_eq(&service.repo, &repo));
    assert_eq!(service.repo.db.url, "postgres://catalog");
}

#[test]
fn created_component_published_with_register_resolves_as_built_type() {
    let (registry, factory) = setup();
    registry.register("db", "conn-handle".to_string());
    factory.register_recipe(
        "Repo",
        Recipe::new(["db"], |deps: &Dependencies| {
            let db: String = deps.get("db")?;
            Ok(format!("wrap({db})"))
        }),
    );
    factory.register_recipe(
        "Service",
        Recipe::new(["Repo"], |deps: &Dependencies| {
            let repo: String = deps.get("Repo")?;
            Ok(format!("useRepo({repo})"))
        }),
    );

    let repo = factory.create("Repo").unwrap();
    registry.register("Repo", Arc::clone(&repo));

    let published = registry.resolve("Repo").unwrap();
    assert!(Arc::ptr_eq(&published, &repo));
    assert_eq!(
        registry.resolve_as::<String>("Repo").unwrap(),
        "wrap(conn-handle)"
    );

    let service: String = factory.create_as("Service").unwrap();
    assert_eq!(service, "useRepo(wrap(conn-handle))");
}

#[test]
fn concurrent_creates_share_the_registry() {
    let (registry, factory) = setup();
    let factory = Arc::new(factory);
    let calls = Arc::new(AtomicUsize::new(0));
    registry.register("db", Arc::new(Db { url: "mem".into() }));
    factory.register_recipe("Repo", repo_recipe(Arc::clone(&calls)));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let factory = Arc::clone(&factory);
            thread::spawn(move || {
                for _ in 0..25 {
                    let repo: Arc<Repo> = factory.create_as("Repo").unwrap();
                    assert_eq!(repo.db.url, "mem");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 200);
}
