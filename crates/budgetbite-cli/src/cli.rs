//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BudgetBite - Smart meal planning on a budget
#[derive(Parser)]
#[command(name = "budgetbite")]
#[command(about = "Chat-style meal planning assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the data dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Session user id
        #[arg(short, long, default_value = "user")]
        user: String,
    },

    /// Send a single message and print the reply
    Ask {
        /// Message to send
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Session user id
        #[arg(short, long, default_value = "user")]
        user: String,

        /// Print the reply as JSON (intent + text)
        #[arg(long)]
        json: bool,
    },

    /// Show which intent a message is classified as
    Classify {
        /// Message to classify
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Show the effective configuration
    Config,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, /api requests need a key from BUDGETBITE_API_KEYS.
        #[arg(long)]
        no_auth: bool,

        /// Directory containing extra static files to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
