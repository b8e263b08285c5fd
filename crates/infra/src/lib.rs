//! # Reciclo Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite-backed client-local key/value storage
//! - JSON repositories for stats, session and notification preferences
//! - Configuration loading (environment, TOML, JSON)
//! - Stub authenticator and tracing-based notification presenter
//!
//! ## Architecture
//! - Implements traits defined in `reciclo-core`
//! - Contains all "impure" code (I/O, clocks, sleeps)

pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod notifications;

// Re-export commonly used items
pub use auth::StubAuthenticator;
pub use database::*;
pub use errors::InfraError;
pub use notifications::TracingPresenter;
