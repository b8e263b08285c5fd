//! Shared fixtures for infra integration tests

#![allow(dead_code)]

use std::sync::{Arc, Once};

use reciclo_infra::database::{DbManager, KvStore};
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness; `RUST_LOG` filters it.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Throwaway migrated database
pub struct DbHarness {
    _temp_dir: TempDir,
    pub manager: Arc<DbManager>,
    pub kv: KvStore,
}

impl DbHarness {
    pub fn new() -> Self {
        init_test_tracing();
        let temp_dir = TempDir::new().expect("temporary directory should be created");
        let db_path = temp_dir.path().join("infra-integration.db");

        let manager =
            Arc::new(DbManager::new(&db_path, 4).expect("database manager should initialise"));
        manager.run_migrations().expect("schema migrations should apply");
        let kv = KvStore::new(Arc::clone(&manager));

        Self { _temp_dir: temp_dir, manager, kv }
    }
}
