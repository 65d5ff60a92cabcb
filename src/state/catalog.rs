use std::collections::HashMap;

use crate::models::{Meal, MealCategory};

/// An immutable snapshot of the meal catalog, keyed by meal id.
///
/// Duplicate ids collapse on construction, last occurrence wins.
pub struct MealCatalog {
    meals: HashMap<String, Meal>,
}

impl MealCatalog {
    pub fn new(meals: Vec<Meal>) -> Self {
        let mut map = HashMap::new();
        for meal in meals {
            map.insert(meal.id.clone(), meal);
        }
        Self { meals: map }
    }

    pub fn get(&self, id: &str) -> Option<&Meal> {
        self.meals.get(id)
    }

    /// Active meals sorted by id, ready to hand to the planner.
    pub fn active_meals(&self) -> Vec<Meal> {
        let mut active: Vec<Meal> = self.meals.values().filter(|m| m.active).cloned().collect();
        active.sort_by(|a, b| a.id.cmp(&b.id));
        active
    }

    /// Active meal counts per category.
    pub fn count_by_category(&self) -> HashMap<MealCategory, usize> {
        let mut counts = HashMap::new();
        for meal in self.meals.values().filter(|m| m.active) {
            *counts.entry(meal.category).or_insert(0) += 1;
        }
        counts
    }

    /// All meals sorted by id, for serialization.
    pub fn to_meals(&self) -> Vec<Meal> {
        let mut all: Vec<Meal> = self.meals.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
