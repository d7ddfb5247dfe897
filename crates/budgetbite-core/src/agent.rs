//! BudgetBite agent: classify a message and dispatch to a response builder
//!
//! The session map is owned by the caller and passed into each query, so the
//! agent itself holds no mutable state.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::classifier::IntentClassifier;
use crate::models::{day_key, Intent, MealPlan, Rupees, DAY_LABELS};
use crate::session::InMemorySessionService;
use crate::tools::{FinanceTools, MealDataProvider, DEFAULT_SERVINGS};

/// Cost recorded for every generated weekly plan
pub const WEEKLY_PLAN_COST: Rupees = 2800;

/// Reply shown for messages that match no rule
pub const HELP_MESSAGE: &str = concat!(
    "BudgetBite - Smart Meal Planner\n",
    "\n",
    "Quick Actions:\n",
    "• \"Create my weekly vegetarian meal plan\" \n",
    "• \"What's my budget remaining?\"\n",
    "• \"Generate shopping list\"\n",
    "\n",
    "Budget: Rs5,000/week",
);

/// A response together with the intent that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentReply {
    pub intent: Intent,
    pub text: String,
}

/// Meal planning assistant
pub struct BudgetBiteAgent<P = FinanceTools> {
    classifier: IntentClassifier,
    tools: P,
}

impl BudgetBiteAgent<FinanceTools> {
    /// Agent with the built-in rules and demo data
    pub fn new() -> Self {
        Self::with_parts(IntentClassifier::new(), FinanceTools::new())
    }
}

impl Default for BudgetBiteAgent<FinanceTools> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MealDataProvider> BudgetBiteAgent<P> {
    pub fn with_parts(classifier: IntentClassifier, tools: P) -> Self {
        Self { classifier, tools }
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn tools(&self) -> &P {
        &self.tools
    }

    pub fn classify_intent(&self, message: &str) -> Intent {
        self.classifier.classify_intent(message)
    }

    /// Handle one message and return the response text
    pub fn process_query(
        &self,
        sessions: &mut InMemorySessionService,
        user_id: &str,
        message: &str,
    ) -> String {
        self.respond(sessions, user_id, message).text
    }

    /// Handle one message and return the response with its intent
    pub fn respond(
        &self,
        sessions: &mut InMemorySessionService,
        user_id: &str,
        message: &str,
    ) -> AgentReply {
        let intent = self.classifier.classify_intent(message);
        debug!(user = %user_id, intent = %intent, "Dispatching query");

        let text = match intent {
            Intent::MealPlanning => self.plan_meals(sessions, user_id),
            Intent::BudgetCheck => self.check_budget(sessions, user_id),
            Intent::ShoppingList => self.shopping_list(),
            Intent::General => HELP_MESSAGE.to_string(),
        };

        AgentReply { intent, text }
    }

    fn plan_meals(&self, sessions: &mut InMemorySessionService, user_id: &str) -> String {
        let session = sessions.get_session(user_id);
        let profile = &session.profile;
        let diet_prefs: Vec<String> = profile.diet_prefs.iter().cloned().collect();
        let recipes =
            self.tools
                .search_recipes(&diet_prefs, profile.budget_weekly, DEFAULT_SERVINGS);

        let mut meals = BTreeMap::new();
        if !recipes.is_empty() {
            for i in 0..DAY_LABELS.len() {
                meals.insert(day_key(i), recipes[i % recipes.len()].name.clone());
            }
        }

        let plan = MealPlan::new(meals, WEEKLY_PLAN_COST);
        let response = format!(
            "{}\nBudget used: Rs{}/Rs{}",
            plan.display(),
            plan.total_cost,
            profile.budget_weekly
        );
        debug!(user = %user_id, recipes = recipes.len(), "Stored new meal plan");
        session.current_plan = Some(plan);
        response
    }

    fn check_budget(&self, sessions: &mut InMemorySessionService, user_id: &str) -> String {
        let budget = self.tools.get_user_budget(user_id);
        match &sessions.get_session(user_id).current_plan {
            Some(plan) => format!(
                "Weekly budget: Rs{}\nRemaining: Rs{}",
                budget,
                budget - plan.total_cost
            ),
            None => format!("Weekly budget: Rs{}", budget),
        }
    }

    fn shopping_list(&self) -> String {
        let shopping = self.tools.generate_shopping_list(&BTreeMap::new());
        format!(
            "Shopping List (Rs{}):\n{}",
            shopping.total,
            shopping.items.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecipeRecord, ShoppingList, UserProfile, REST_DAY};

    struct EmptyPantry;

    impl MealDataProvider for EmptyPantry {
        fn get_user_budget(&self, _user_id: &str) -> Rupees {
            1000
        }

        fn search_recipes(&self, _: &[String], _: Rupees, _: u32) -> Vec<RecipeRecord> {
            Vec::new()
        }

        fn generate_shopping_list(&self, _meals: &BTreeMap<String, String>) -> ShoppingList {
            ShoppingList::new(Vec::new(), 0)
        }
    }

    #[test]
    fn test_meal_plan_report() {
        let agent = BudgetBiteAgent::new();
        let mut sessions = InMemorySessionService::new();

        let reply = agent.respond(&mut sessions, "user", "Create my weekly vegetarian meal plan");
        assert_eq!(reply.intent, Intent::MealPlanning);
        assert_eq!(
            reply.text,
            "Weekly Plan (Rs2800):\n\
             \x20 Mon: Dal Tadka + Roti\n\
             \x20 Tue: Veg Stir Fry + Quinoa\n\
             \x20 Wed: Paneer Tikka + Salad\n\
             \x20 Thu: Moong Dal Khichdi\n\
             \x20 Fri: Veg Biryani + Raita\n\
             \x20 Sat: Aloo Gobi + Chapati\n\
             \x20 Sun: Rajma + Rice\n\
             \nBudget used: Rs2800/Rs5000"
        );

        let plan = sessions.get_session("user").current_plan.clone().unwrap();
        assert_eq!(plan.total_cost, WEEKLY_PLAN_COST);
        assert_eq!(plan.meals.len(), 7);
    }

    #[test]
    fn test_budget_used_reflects_profile() {
        let agent = BudgetBiteAgent::new();
        let mut sessions = InMemorySessionService::with_default_profile(UserProfile {
            budget_weekly: 4000,
            ..Default::default()
        });

        let text = agent.process_query(&mut sessions, "user", "meal plan");
        assert!(text.ends_with("Budget used: Rs2800/Rs4000"));
    }

    #[test]
    fn test_budget_without_plan() {
        let agent = BudgetBiteAgent::new();
        let mut sessions = InMemorySessionService::new();

        let text = agent.process_query(&mut sessions, "user", "What's my budget remaining?");
        assert_eq!(text, "Weekly budget: Rs5000");
    }

    #[test]
    fn test_budget_after_plan() {
        let agent = BudgetBiteAgent::new();
        let mut sessions = InMemorySessionService::new();

        agent.process_query(&mut sessions, "user", "Create my weekly vegetarian meal plan");
        let text = agent.process_query(&mut sessions, "user", "What's my budget remaining?");
        assert_eq!(text, "Weekly budget: Rs5000\nRemaining: Rs2200");
    }

    #[test]
    fn test_plan_is_per_user() {
        let agent = BudgetBiteAgent::new();
        let mut sessions = InMemorySessionService::new();

        agent.process_query(&mut sessions, "alice", "meal plan");
        let text = agent.process_query(&mut sessions, "bob", "budget?");
        assert_eq!(text, "Weekly budget: Rs5000");
    }

    #[test]
    fn test_shopping_list() {
        let agent = BudgetBiteAgent::new();
        let mut sessions = InMemorySessionService::new();

        let reply = agent.respond(&mut sessions, "user", "grocery list please");
        assert_eq!(reply.intent, Intent::ShoppingList);
        assert_eq!(
            reply.text,
            "Shopping List (Rs2800):\n2kg Rice (Rs120)\n1kg Dal (Rs150)\n500g Paneer (Rs250)\n\
             Veggies 2kg (Rs100)\nSpices (Rs80)\n2L Milk (Rs100)"
        );
        assert!(sessions.get_session("user").current_plan.is_none());
    }

    #[test]
    fn test_help_message() {
        let agent = BudgetBiteAgent::new();
        let mut sessions = InMemorySessionService::new();

        let reply = agent.respond(&mut sessions, "user", "hello");
        assert_eq!(reply.intent, Intent::General);
        assert_eq!(reply.text, HELP_MESSAGE);
        assert!(reply
            .text
            .contains("• \"Create my weekly vegetarian meal plan\" \n"));
        assert!(reply.text.ends_with("Budget: Rs5,000/week"));
    }

    #[test]
    fn test_new_plan_replaces_old() {
        let agent = BudgetBiteAgent::new();
        let mut sessions = InMemorySessionService::new();
        sessions.get_session("user").current_plan = Some(MealPlan::new(BTreeMap::new(), 100));

        agent.process_query(&mut sessions, "user", "plan my food");
        let plan = sessions.get_session("user").current_plan.clone().unwrap();
        assert_eq!(plan.total_cost, WEEKLY_PLAN_COST);
        assert_eq!(plan.meals.len(), 7);
    }

    #[test]
    fn test_empty_recipes_render_rest_days() {
        let agent = BudgetBiteAgent::with_parts(IntentClassifier::new(), EmptyPantry);
        let mut sessions = InMemorySessionService::new();

        let text = agent.process_query(&mut sessions, "user", "meal plan");
        assert_eq!(text.matches(REST_DAY).count(), 7);

        let text = agent.process_query(&mut sessions, "user", "budget");
        assert_eq!(text, "Weekly budget: Rs1000\nRemaining: Rs-1800");

        let text = agent.process_query(&mut sessions, "user", "shopping");
        assert_eq!(text, "Shopping List (Rs0):\n");
    }
}
