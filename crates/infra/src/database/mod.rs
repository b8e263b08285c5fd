//! Database implementations

pub mod kv_store;
pub mod manager;
pub mod preferences_repository;
pub mod session_repository;
pub mod stats_repository;

pub use kv_store::KvStore;
pub use manager::DbManager;
pub use preferences_repository::SqlitePreferencesRepository;
pub use session_repository::SqliteSessionRepository;
pub use stats_repository::SqliteStatsRepository;
