//! BudgetBite Core Library
//!
//! Shared functionality for the BudgetBite meal planning assistant:
//! - Domain models (profile, weekly plan, shopping list, intents)
//! - Ordered keyword intent classifier
//! - Pluggable meal data provider with fixed demo data
//! - In-memory per-user sessions
//! - Query dispatch agent
//! - Chat transcript for UIs
//! - TOML configuration loading

pub mod agent;
pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod tools;
pub mod transcript;

pub use agent::{AgentReply, BudgetBiteAgent, HELP_MESSAGE, WEEKLY_PLAN_COST};
pub use classifier::{default_rules, IntentClassifier, IntentRule};
pub use config::{AppConfig, ConfigSource};
pub use error::{Error, Result};
pub use models::{
    Intent, MealPlan, QuickAction, RecipeRecord, Rupees, ShoppingList, UserProfile,
};
pub use session::{InMemorySessionService, Session};
pub use tools::{FinanceTools, MealDataProvider};
pub use transcript::{ChatMessage, ChatRole, Transcript};
