#![allow(dead_code)]

use std::sync::{Arc, LazyLock};

use shinelix::store::{Error, MemoryStore, SnapshotStore};
use shinelix::{CartManager, CartOptions, StaticCatalog};
use tracing_subscriber::EnvFilter;

static TRACING_INIT: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init()
        .ok();
});

pub fn setup_tracing() {
    LazyLock::force(&TRACING_INIT);
}

pub type TestCart<S = MemoryStore> = CartManager<S, StaticCatalog>;

pub fn catalog() -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog::shinelix())
}

pub fn cart_with_store<S: SnapshotStore>(store: Arc<S>) -> TestCart<S> {
    setup_tracing();
    CartManager::load(store, catalog(), CartOptions::default())
}

pub fn empty_cart() -> (Arc<MemoryStore>, TestCart) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), cart_with_store(store))
}

/// A store whose writes always fail, to exercise best-effort persistence.
#[derive(Debug, Default)]
pub struct FailingStore;

impl SnapshotStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, Error> {
        Err(Error::Backend("storage unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), Error> {
        Err(Error::Backend("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<bool, Error> {
        Err(Error::Backend("storage unavailable".to_string()))
    }
}
