use crate::models::{Allergen, DietaryTag, Meal, MealCategory};

/// Constraint set applied by [`filter_meals`].
///
/// Stages run in a fixed order: allergens, then dietary tags, then category.
/// A stage with an empty/absent option is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MealFilter<'a> {
    pub allergies: &'a [Allergen],
    pub dietary_preferences: &'a [DietaryTag],
    pub category: Option<MealCategory>,
}

/// Drop every meal containing any of the listed allergens (OR exclusion).
pub fn filter_by_allergens<'a>(meals: Vec<&'a Meal>, allergies: &[Allergen]) -> Vec<&'a Meal> {
    if allergies.is_empty() {
        return meals;
    }

    meals
        .into_iter()
        .filter(|meal| !allergies.iter().any(|a| meal.contains_allergen(*a)))
        .collect()
}

/// Keep only meals carrying every listed tag (AND inclusion).
pub fn filter_by_dietary_tags<'a>(
    meals: Vec<&'a Meal>,
    preferences: &[DietaryTag],
) -> Vec<&'a Meal> {
    if preferences.is_empty() {
        return meals;
    }

    meals
        .into_iter()
        .filter(|meal| meal.has_all_tags(preferences))
        .collect()
}

/// Keep only meals of exactly this category.
pub fn filter_by_category(meals: Vec<&Meal>, category: MealCategory) -> Vec<&Meal> {
    meals
        .into_iter()
        .filter(|meal| meal.category == category)
        .collect()
}

/// Apply the full pipeline. Output is always an order-preserving subset of
/// the input; the worst case is an empty result, never a failure.
pub fn filter_meals<'a>(meals: &'a [Meal], filter: &MealFilter<'_>) -> Vec<&'a Meal> {
    let mut survivors: Vec<&Meal> = meals.iter().collect();

    survivors = filter_by_allergens(survivors, filter.allergies);
    survivors = filter_by_dietary_tags(survivors, filter.dietary_preferences);

    if let Some(category) = filter.category {
        survivors = filter_by_category(survivors, category);
    }

    survivors
}
