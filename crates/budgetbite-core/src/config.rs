//! Configuration for the default profile and intent rules
//!
//! ## Configuration Resolution
//!
//! 1. Explicit path (e.g. `--config`), which must exist
//! 2. Override in data dir (~/.local/share/budgetbite/config/budgetbite.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::agent::BudgetBiteAgent;
use crate::classifier::{default_rules, IntentClassifier, IntentRule};
use crate::error::{Error, Result};
use crate::models::{Intent, UserProfile};
use crate::session::InMemorySessionService;
use crate::tools::FinanceTools;

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/budgetbite.toml");

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Profile given to newly created sessions
    pub profile: UserProfile,
    /// Classifier rules in priority order
    pub rules: Vec<IntentRule>,
    pub source: ConfigSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: UserProfile::default(),
            rules: default_rules(),
            source: ConfigSource::Embedded,
        }
    }
}

impl AppConfig {
    /// Load configuration, see module docs for the resolution order
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        if let Some(default_path) = default_config_path() {
            if default_path.exists() {
                return Self::from_file(&default_path);
            }
        }

        parse_config(DEFAULT_CONFIG, ConfigSource::Embedded)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_config(&content, ConfigSource::File(path.to_path_buf()))
    }

    pub fn classifier(&self) -> IntentClassifier {
        IntentClassifier::with_rules(self.rules.clone())
    }

    pub fn session_service(&self) -> InMemorySessionService {
        InMemorySessionService::with_default_profile(self.profile.clone())
    }

    /// Agent using the configured rules and the demo data
    pub fn agent(&self) -> BudgetBiteAgent<FinanceTools> {
        BudgetBiteAgent::with_parts(self.classifier(), FinanceTools::new())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("budgetbite").join("config").join("budgetbite.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    profile: Option<RawProfile>,
    intents: Option<Vec<RawRule>>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    budget_weekly: Option<i64>,
    diet_prefs: Option<Vec<String>>,
    family_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    intent: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str, source: ConfigSource) -> Result<AppConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AppConfig {
        source,
        ..Default::default()
    };

    if let Some(profile) = raw.profile {
        if let Some(budget) = profile.budget_weekly {
            config.profile.budget_weekly = budget;
        }
        if let Some(prefs) = profile.diet_prefs {
            config.profile.diet_prefs = prefs.into_iter().map(|p| p.to_lowercase()).collect();
        }
        if let Some(size) = profile.family_size {
            config.profile.family_size = size;
        }
    }

    if let Some(raw_rules) = raw.intents {
        let mut rules = Vec::new();
        for rule in raw_rules {
            let intent = match rule.intent.parse::<Intent>() {
                Ok(intent) => intent,
                Err(e) => {
                    warn!(error = %e, "Skipping intent rule");
                    continue;
                }
            };
            let keywords: Vec<&str> = rule.keywords.iter().map(String::as_str).collect();
            rules.push(IntentRule::new(intent, &keywords));
        }
        if !rules.is_empty() {
            config.rules = rules;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG, ConfigSource::Embedded).unwrap();
        assert_eq!(config.profile, UserProfile::default());
        assert_eq!(config.rules, default_rules());
    }

    #[test]
    fn test_partial_profile_override() {
        let config = parse_config(
            "[profile]\nbudget_weekly = 7500\n",
            ConfigSource::Embedded,
        )
        .unwrap();
        assert_eq!(config.profile.budget_weekly, 7500);
        assert_eq!(config.profile.family_size, 2);
        assert!(config.profile.diet_prefs.contains("vegetarian"));
        assert_eq!(config.rules, default_rules());
    }

    #[test]
    fn test_rules_override_and_unknown_intents() {
        let content = r#"
[[intents]]
intent = "shopping_list"
keywords = ["Basket"]

[[intents]]
intent = "weather"
keywords = ["rain"]
"#;
        let config = parse_config(content, ConfigSource::Embedded).unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].intent, Intent::ShoppingList);
        assert_eq!(config.rules[0].keywords, vec!["basket".to_string()]);

        let classifier = config.classifier();
        assert_eq!(classifier.classify_intent("my BASKET"), Intent::ShoppingList);
        assert_eq!(classifier.classify_intent("budget"), Intent::General);
    }

    #[test]
    fn test_all_unknown_rules_keep_defaults() {
        let content = "[[intents]]\nintent = \"weather\"\nkeywords = [\"rain\"]\n";
        let config = parse_config(content, ConfigSource::Embedded).unwrap();
        assert_eq!(config.rules, default_rules());
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_config("[profile\nbudget_weekly = ", ConfigSource::Embedded);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[profile]\nfamily_size = 5\ndiet_prefs = [\"Vegan\"]").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.profile.family_size, 5);
        assert!(config.profile.diet_prefs.contains("vegan"));
        assert_eq!(config.source, ConfigSource::File(file.path().to_path_buf()));

        let mut sessions = config.session_service();
        assert_eq!(sessions.get_session("user").profile.family_size, 5);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
