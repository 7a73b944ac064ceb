// ABOUTME: Temporary customer store and router fixtures for integration tests
// ABOUTME: Each fixture owns a fresh SQLite file in its own temp directory

use axum::Router;
use customer_api::{config::ServerConfig, database::CustomerStore, server};
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// A bootstrapped store in a temp directory; the directory lives as long as this value
pub struct TestStore {
    /// Keeps the directory alive
    _dir: TempDir,
    /// The store under test
    pub store: Arc<CustomerStore>,
}

impl TestStore {
    /// Create and bootstrap a fresh store
    pub async fn new() -> Self {
        init_test_logging();
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("sqlite").join("customers.sqlite");
        let store = Arc::new(CustomerStore::new(path));
        store.bootstrap().await.expect("Failed to bootstrap store");
        Self { _dir: dir, store }
    }

    /// Full router, middleware included, over this store
    pub fn router(&self) -> Router {
        server::build_router(Arc::clone(&self.store), &ServerConfig::default())
    }
}
