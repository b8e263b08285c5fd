//! Shared fixtures for app-level integration tests

#![allow(dead_code)]

use reciclo_domain::{Config, Registration};
use reciclo_lib::AppContext;
use tempfile::TempDir;

/// An [`AppContext`] over a throwaway database
pub struct TestApp {
    pub temp_dir: TempDir,
    pub ctx: AppContext,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("temporary directory should be created");
        let ctx = AppContext::new(config_for(&temp_dir)).await.expect("context should start");
        Self { temp_dir, ctx }
    }

    /// A second context over the same database, as after an app restart
    pub async fn reopen(&self) -> AppContext {
        AppContext::new(config_for(&self.temp_dir)).await.expect("context should restart")
    }
}

pub fn config_for(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.storage.path = dir.path().join("reciclo.db").to_string_lossy().into_owned();
    config.storage.pool_size = 2;
    config
}

pub fn registration() -> Registration {
    Registration {
        name: "Ana Souza".into(),
        email: "ana@reciclo.com".into(),
        phone: Some("11 99999-0000".into()),
        password: "Abcdef12".into(),
        confirm_password: "Abcdef12".into(),
        objective: Some("Reciclar mais".into()),
    }
}
