//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Config loading and the `config` command
//! - `chat` - Interactive chat, one-shot `ask`, and `classify`
//! - `serve` - Web server command

pub mod chat;
pub mod config;
pub mod serve;

// Re-export command functions for main.rs
pub use chat::*;
pub use config::*;
pub use serve::*;
