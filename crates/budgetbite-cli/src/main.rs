//! BudgetBite CLI - Meal planning assistant
//!
//! Usage:
//!   budgetbite chat                 Interactive chat
//!   budgetbite ask "meal plan"      One-shot query
//!   budgetbite classify "budget?"   Show the classified intent
//!   budgetbite serve --port 3000    Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Chat { user } => commands::cmd_chat(&config, &user),
        Commands::Ask {
            message,
            user,
            json,
        } => commands::cmd_ask(&config, &user, &message.join(" "), json),
        Commands::Classify { message } => commands::cmd_classify(&config, &message.join(" ")),
        Commands::Config => commands::cmd_config(&config),
        Commands::Serve {
            port,
            host,
            no_auth,
            static_dir,
        } => commands::cmd_serve(&config, &host, port, no_auth, static_dir.as_deref()).await,
    }
}
