//! # Reciclo App
//!
//! Application layer - commands and dependency wiring.
//!
//! This crate contains:
//! - Commands (the boundary the UI or CLI calls)
//! - Application context (dependency injection)
//! - The `reciclo` command-line entry point
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
