//! Domain models for BudgetBite

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Whole-rupee amount
pub type Rupees = i64;

/// Day labels rendered by [`MealPlan::display`], in plan order
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Placeholder shown for a day with no meal assigned
pub const REST_DAY: &str = "Rest Day";

/// Key used in [`MealPlan::meals`] for the zero-based day index
pub fn day_key(index: usize) -> String {
    format!("day{}", index + 1)
}

/// A user's planning preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub budget_weekly: Rupees,
    pub diet_prefs: BTreeSet<String>,
    pub family_size: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            budget_weekly: 5000,
            diet_prefs: BTreeSet::from(["vegetarian".to_string()]),
            family_size: 2,
        }
    }
}

/// A weekly meal plan keyed by `day1`..`day7`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub meals: BTreeMap<String, String>,
    pub total_cost: Rupees,
}

impl MealPlan {
    pub fn new(meals: BTreeMap<String, String>, total_cost: Rupees) -> Self {
        Self { meals, total_cost }
    }

    /// Meal for a zero-based day index, or [`REST_DAY`] if unassigned
    pub fn meal_for_day(&self, index: usize) -> &str {
        self.meals
            .get(&day_key(index))
            .map(String::as_str)
            .unwrap_or(REST_DAY)
    }

    /// Render the fixed seven-day report
    pub fn display(&self) -> String {
        let mut output = format!("Weekly Plan (Rs{}):\n", self.total_cost);
        for (i, day) in DAY_LABELS.iter().enumerate() {
            output.push_str(&format!("  {}: {}\n", day, self.meal_for_day(i)));
        }
        output
    }
}

/// A generated shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: Vec<String>,
    pub total: Rupees,
}

impl ShoppingList {
    pub fn new(items: Vec<String>, total: Rupees) -> Self {
        Self { items, total }
    }
}

/// A recipe returned by recipe search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    pub cost: Rupees,
}

impl RecipeRecord {
    pub fn new(name: impl Into<String>, cost: Rupees) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

/// Classified purpose of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    BudgetCheck,
    ShoppingList,
    MealPlanning,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BudgetCheck => "budget_check",
            Self::ShoppingList => "shopping_list",
            Self::MealPlanning => "meal_planning",
            Self::General => "general",
        }
    }

    pub fn all() -> &'static [Intent] {
        &[
            Self::BudgetCheck,
            Self::ShoppingList,
            Self::MealPlanning,
            Self::General,
        ]
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget_check" | "budget" => Ok(Self::BudgetCheck),
            "shopping_list" | "shopping" => Ok(Self::ShoppingList),
            "meal_planning" | "meal" => Ok(Self::MealPlanning),
            "general" => Ok(Self::General),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shortcut buttons offered by the chat UIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    MealPlan,
    Budget,
    Shopping,
}

impl QuickAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MealPlan => "meal_plan",
            Self::Budget => "budget",
            Self::Shopping => "shopping",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::MealPlan => "📅 Meal Plan",
            Self::Budget => "💰 Budget",
            Self::Shopping => "🛒 Shopping",
        }
    }

    /// Message submitted on the user's behalf when the button is pressed
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::MealPlan => "Create meal plan",
            Self::Budget => "budget?",
            Self::Shopping => "shopping list",
        }
    }

    pub fn all() -> &'static [QuickAction] {
        &[Self::MealPlan, Self::Budget, Self::Shopping]
    }
}

impl std::str::FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meal_plan" | "meal-plan" | "mealplan" => Ok(Self::MealPlan),
            "budget" => Ok(Self::Budget),
            "shopping" => Ok(Self::Shopping),
            _ => Err(format!("Unknown quick action: {}", s)),
        }
    }
}

impl std::fmt::Display for QuickAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.budget_weekly, 5000);
        assert!(profile.diet_prefs.contains("vegetarian"));
        assert_eq!(profile.family_size, 2);
    }

    #[test]
    fn test_display_fills_missing_days() {
        let mut meals = BTreeMap::new();
        meals.insert(day_key(0), "Dal Tadka + Roti".to_string());
        meals.insert(day_key(6), "Rajma + Rice".to_string());
        let plan = MealPlan::new(meals, 120);

        assert_eq!(
            plan.display(),
            "Weekly Plan (Rs120):\n  Mon: Dal Tadka + Roti\n  Tue: Rest Day\n  Wed: Rest Day\n  \
             Thu: Rest Day\n  Fri: Rest Day\n  Sat: Rest Day\n  Sun: Rajma + Rice\n"
        );
    }

    #[test]
    fn test_display_ignores_extra_keys() {
        let mut meals = BTreeMap::new();
        meals.insert("day8".to_string(), "Leftovers".to_string());
        let plan = MealPlan::new(meals, 0);
        assert!(!plan.display().contains("Leftovers"));
        assert_eq!(plan.display().matches(REST_DAY).count(), 7);
    }

    #[test]
    fn test_intent_round_trip() {
        for intent in Intent::all() {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), *intent);
        }
        assert!("weather".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_serializes_as_label() {
        let json = serde_json::to_string(&Intent::MealPlanning).unwrap();
        assert_eq!(json, "\"meal_planning\"");
    }

    #[test]
    fn test_quick_action_prompts() {
        assert_eq!(QuickAction::MealPlan.prompt(), "Create meal plan");
        assert_eq!(QuickAction::Budget.prompt(), "budget?");
        assert_eq!(QuickAction::Shopping.prompt(), "shopping list");
        assert_eq!("meal-plan".parse::<QuickAction>(), Ok(QuickAction::MealPlan));
    }
}
