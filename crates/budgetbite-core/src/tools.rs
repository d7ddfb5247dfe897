//! Data lookups used by the agent
//!
//! [`FinanceTools`] returns fixed demo data. Its inputs (diet preferences,
//! budget, servings, selected meals) are accepted but not used yet; a real
//! source can be plugged in by implementing [`MealDataProvider`].

use std::collections::BTreeMap;

use crate::models::{RecipeRecord, Rupees, ShoppingList};

/// Servings assumed when the caller doesn't specify any
pub const DEFAULT_SERVINGS: u32 = 2;

/// Source of budgets, recipes, and shopping lists
pub trait MealDataProvider: Send + Sync {
    /// Weekly budget for a user
    fn get_user_budget(&self, user_id: &str) -> Rupees;

    /// Recipes matching the given preferences, in suggestion order
    fn search_recipes(
        &self,
        diet_prefs: &[String],
        budget: Rupees,
        servings: u32,
    ) -> Vec<RecipeRecord>;

    /// Shopping list for a set of planned meals (day key → meal name)
    fn generate_shopping_list(&self, meals: &BTreeMap<String, String>) -> ShoppingList;
}

/// Fixed demo data
#[derive(Debug, Clone, Copy, Default)]
pub struct FinanceTools;

impl FinanceTools {
    pub fn new() -> Self {
        Self
    }
}

impl MealDataProvider for FinanceTools {
    fn get_user_budget(&self, _user_id: &str) -> Rupees {
        5000
    }

    fn search_recipes(
        &self,
        _diet_prefs: &[String],
        _budget: Rupees,
        _servings: u32,
    ) -> Vec<RecipeRecord> {
        vec![
            RecipeRecord::new("Dal Tadka + Roti", 60),
            RecipeRecord::new("Veg Stir Fry + Quinoa", 75),
            RecipeRecord::new("Paneer Tikka + Salad", 90),
            RecipeRecord::new("Moong Dal Khichdi", 45),
            RecipeRecord::new("Veg Biryani + Raita", 80),
            RecipeRecord::new("Aloo Gobi + Chapati", 55),
            RecipeRecord::new("Rajma + Rice", 65),
        ]
    }

    fn generate_shopping_list(&self, _meals: &BTreeMap<String, String>) -> ShoppingList {
        ShoppingList::new(
            vec![
                "2kg Rice (Rs120)".to_string(),
                "1kg Dal (Rs150)".to_string(),
                "500g Paneer (Rs250)".to_string(),
                "Veggies 2kg (Rs100)".to_string(),
                "Spices (Rs80)".to_string(),
                "2L Milk (Rs100)".to_string(),
            ],
            2800,
        )
    }
}
