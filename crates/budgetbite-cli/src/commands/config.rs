//! Configuration commands and shared utilities
//!
//! This module contains:
//! - `load_config` - Shared utility to resolve the configuration
//! - `cmd_config` - Show the effective configuration

use std::path::Path;

use anyhow::{Context, Result};
use budgetbite_core::{config::default_config_path, AppConfig};

/// Load config from an explicit path, the data dir override, or built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    AppConfig::load(path).context("Failed to load configuration")
}

pub fn cmd_config(config: &AppConfig) -> Result<()> {
    println!("⚙️  BudgetBite configuration");
    println!("   Source: {}", config.source);
    if let Some(path) = default_config_path() {
        println!("   Override path: {}", path.display());
    }
    println!();

    println!("Default profile:");
    println!("   Weekly budget: Rs{}", config.profile.budget_weekly);
    println!(
        "   Diet preferences: {}",
        config
            .profile
            .diet_prefs
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("   Family size: {}", config.profile.family_size);
    println!();

    println!("Intent rules (first match wins):");
    for (i, rule) in config.rules.iter().enumerate() {
        println!(
            "   {}. {:<14} {}",
            i + 1,
            rule.intent.as_str(),
            rule.keywords.join(", ")
        );
    }
    println!("   -  {:<14} (no match)", "general");

    Ok(())
}
