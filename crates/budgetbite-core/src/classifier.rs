//! Keyword intent classifier
//!
//! Messages are lower-cased and checked against an ordered list of rules.
//! Each rule matches when any of its keywords occurs as a substring; the
//! first matching rule wins and no match yields [`Intent::General`].

use crate::models::Intent;

/// A keyword set mapped to the intent it selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: Vec<String>,
}

impl IntentRule {
    pub fn new(intent: Intent, keywords: &[&str]) -> Self {
        Self {
            intent,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// `message` must already be lower-cased
    fn matches(&self, message: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && message.contains(k.as_str()))
    }
}

/// Built-in rules in priority order
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(Intent::BudgetCheck, &["budget", "money", "rs", "remaining"]),
        IntentRule::new(Intent::ShoppingList, &["shopping", "list", "grocery"]),
        IntentRule::new(Intent::MealPlanning, &["meal", "plan", "vegetarian", "food"]),
    ]
}

/// Ordered-rule intent classifier
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Use custom rules; an empty list falls back to [`default_rules`]
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        if rules.is_empty() {
            return Self {
                rules: default_rules(),
            };
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn classify_intent(&self, message: &str) -> Intent {
        let msg = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&msg))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::General)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
