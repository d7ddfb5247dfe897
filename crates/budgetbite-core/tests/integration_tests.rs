//! Integration tests for budgetbite-core
//!
//! These tests exercise full conversations through the public API.

use budgetbite_core::{
    config::{parse_config, ConfigSource, DEFAULT_CONFIG},
    models::DAY_LABELS,
    AppConfig, BudgetBiteAgent, InMemorySessionService, Intent, QuickAction, Transcript,
    HELP_MESSAGE,
};

const RECIPES: [&str; 7] = [
    "Dal Tadka + Roti",
    "Veg Stir Fry + Quinoa",
    "Paneer Tikka + Salad",
    "Moong Dal Khichdi",
    "Veg Biryani + Raita",
    "Aloo Gobi + Chapati",
    "Rajma + Rice",
];

// =============================================================================
// Conversation Scenarios
// =============================================================================

#[test]
fn test_plan_then_budget_conversation() {
    let agent = BudgetBiteAgent::new();
    let mut sessions = InMemorySessionService::new();

    let before = agent.process_query(&mut sessions, "user", "What's my budget remaining?");
    assert_eq!(before, "Weekly budget: Rs5000");

    let plan = agent.process_query(&mut sessions, "user", "Create my weekly vegetarian meal plan");
    let day_lines: Vec<&str> = plan.lines().filter(|l| l.starts_with("  ")).collect();
    assert_eq!(day_lines.len(), 7);
    for (i, line) in day_lines.iter().enumerate() {
        assert_eq!(*line, format!("  {}: {}", DAY_LABELS[i], RECIPES[i % RECIPES.len()]));
    }
    assert!(plan.contains("Rs2800/Rs5000"));

    let after = agent.process_query(&mut sessions, "user", "What's my budget remaining?");
    assert!(after.contains("Remaining: Rs2200"));
}

#[test]
fn test_shopping_list_scenario() {
    let agent = BudgetBiteAgent::new();
    let mut sessions = InMemorySessionService::new();

    let reply = agent.respond(&mut sessions, "user", "grocery list please");
    assert_eq!(reply.intent, Intent::ShoppingList);

    let lines: Vec<&str> = reply.text.lines().collect();
    assert_eq!(lines[0], "Shopping List (Rs2800):");
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[6], "2L Milk (Rs100)");
}

#[test]
fn test_unmatched_messages_get_help() {
    let agent = BudgetBiteAgent::new();
    let mut sessions = InMemorySessionService::new();

    for message in ["hello", "", "what can you do?", "👋"] {
        assert_eq!(agent.process_query(&mut sessions, "user", message), HELP_MESSAGE);
    }
}

#[test]
fn test_quick_actions_route_to_expected_intents() {
    let agent = BudgetBiteAgent::new();
    let expected = [
        (QuickAction::MealPlan, Intent::MealPlanning),
        (QuickAction::Budget, Intent::BudgetCheck),
        (QuickAction::Shopping, Intent::ShoppingList),
    ];

    for (action, intent) in expected {
        assert_eq!(agent.classify_intent(action.prompt()), intent);
    }
}

#[test]
fn test_transcript_follows_conversation() {
    let agent = BudgetBiteAgent::new();
    let mut sessions = InMemorySessionService::new();
    let mut transcript = Transcript::new();

    for message in ["meal plan", "budget?"] {
        transcript.push_user(message);
        let response = agent.process_query(&mut sessions, "user", message);
        transcript.push_assistant(response);
    }

    assert_eq!(transcript.len(), 4);
    assert!(transcript.messages()[3].content.contains("Remaining: Rs2200"));
}

// =============================================================================
// Config Integration
// =============================================================================

#[test]
fn test_configured_agent_matches_builtin() {
    let config = parse_config(DEFAULT_CONFIG, ConfigSource::Embedded).unwrap();
    let configured = config.agent();
    let builtin = BudgetBiteAgent::new();

    let mut a = config.session_service();
    let mut b = InMemorySessionService::new();
    for message in [
        "Create my weekly vegetarian meal plan",
        "What's my budget remaining?",
        "grocery list please",
        "hello",
    ] {
        assert_eq!(
            configured.process_query(&mut a, "user", message),
            builtin.process_query(&mut b, "user", message)
        );
    }
}

#[test]
fn test_configured_profile_budget() {
    let config = AppConfig {
        profile: budgetbite_core::UserProfile {
            budget_weekly: 6000,
            ..Default::default()
        },
        ..Default::default()
    };
    let agent = config.agent();
    let mut sessions = config.session_service();

    let plan = agent.process_query(&mut sessions, "user", "meal plan");
    assert!(plan.ends_with("Budget used: Rs2800/Rs6000"));

    // Budget checks read the data provider, not the profile
    let budget = agent.process_query(&mut sessions, "user", "budget");
    assert_eq!(budget, "Weekly budget: Rs5000\nRemaining: Rs2200");
}
