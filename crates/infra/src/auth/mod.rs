//! Account backends

pub mod stub;

pub use stub::StubAuthenticator;
