pub mod meal;
pub mod plan;

pub use meal::{
    Allergen, DietaryTag, MacroTargets, Meal, MealCategory, NutritionalInfo, ScoringWeights, Slot,
};
pub use plan::{
    MacroDeviation, PlanItem, PlanResult, ScoredMeal, SlotAllocation, SlotPercentage,
};
