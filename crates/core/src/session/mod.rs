//! Session lifecycle: login, registration, logout and profile updates

pub mod password;
pub mod ports;
pub mod service;
pub mod validation;

pub use service::SessionStore;
