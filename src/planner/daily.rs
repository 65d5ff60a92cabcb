use std::collections::HashMap;

use crate::error::Result;
use crate::models::{
    Allergen, DietaryTag, MacroTargets, Meal, NutritionalInfo, PlanResult, ScoringWeights, Slot,
    SlotPercentage,
};
use crate::planner::allocation::allocate_slots;
use crate::planner::filters::{filter_meals, MealFilter};
use crate::planner::optimizer::find_optimal_plan;

/// A "build my day" request.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub daily_targets: MacroTargets,
    pub slots: Vec<SlotPercentage>,
    pub allergies: Vec<Allergen>,
    pub dietary_preferences: Vec<DietaryTag>,
    pub weights: Option<ScoringWeights>,
}

/// Generate a full-day plan: one meal per requested slot.
///
/// Filters the catalog once by allergens and dietary preferences (category
/// is applied per-slot below), allocates the daily targets across the
/// requested slots, partitions the survivors into per-slot pools by their
/// category, and runs the optimizer. `Err` means malformed slot percentages;
/// `Ok(None)` means no feasible plan: a required slot has no eligible
/// candidates.
pub fn generate_daily_plan(meals: &[Meal], request: &PlanRequest) -> Result<Option<PlanResult>> {
    let filter = MealFilter {
        allergies: &request.allergies,
        dietary_preferences: &request.dietary_preferences,
        category: None,
    };
    let eligible = filter_meals(meals, &filter);

    let allocations = allocate_slots(&request.daily_targets, &request.slots)?;

    // A meal can only fill the slot matching its own category.
    let mut meals_by_slot: HashMap<Slot, Vec<&Meal>> = HashMap::new();
    for meal in eligible {
        meals_by_slot.entry(meal.category.slot()).or_default().push(meal);
    }

    let weights = request.weights.unwrap_or_default();
    let Some(optimized) = find_optimal_plan(&allocations, &meals_by_slot, &weights) else {
        return Ok(None);
    };

    let actual_macros = optimized
        .items
        .iter()
        .fold(NutritionalInfo::zero(), |acc, item| {
            acc.add(&item.meal.nutritional_info)
        });

    Ok(Some(PlanResult {
        items: optimized.items,
        total_score: optimized.total_score,
        actual_macros,
        target_macros: request.daily_targets,
    }))
}
