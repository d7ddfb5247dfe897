//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use budgetbite_core::AppConfig;

pub async fn cmd_serve(
    config: &AppConfig,
    host: &str,
    port: u16,
    no_auth: bool,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting BudgetBite web server...");
    println!("   Config: {}", config.source);
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    // Parse API keys from environment (comma-separated)
    let api_keys =
        budgetbite_server::parse_api_keys(&std::env::var("BUDGETBITE_API_KEYS").unwrap_or_default());

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else if api_keys.is_empty() {
        println!("   🔒 Authentication: enabled, but BUDGETBITE_API_KEYS is empty");
        println!("      API requests will be rejected; use --no-auth for local use");
    } else {
        println!(
            "   🔑 API keys: {} configured (BUDGETBITE_API_KEYS)",
            api_keys.len()
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let server_config = budgetbite_server::ServerConfig {
        require_auth: !no_auth,
        allowed_origins: vec![],
        api_keys,
    };

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;
    budgetbite_server::serve_with_config(config, host, port, static_dir_str, server_config)
        .await?;

    Ok(())
}
