//! Commands - the boundary the UI and CLI call into

mod gamification;
mod notifications;
mod session;

pub use gamification::*;
pub use notifications::*;
pub use session::*;
