//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod chat;
pub mod session;
pub mod ui;

// Re-export all handlers for use in router
pub use chat::*;
pub use session::*;
pub use ui::*;
