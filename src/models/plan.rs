use serde::{Deserialize, Serialize};

use crate::models::meal::{MacroTargets, Meal, NutritionalInfo, Slot};

/// Absolute per-macro difference from a target. Non-negative, unbounded.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroDeviation {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A meal ranked against a macro target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMeal {
    pub meal: Meal,

    /// Fit score in [0, 1]; 1 is a perfect match.
    pub score: f64,

    pub deviation: MacroDeviation,
}

/// Caller-supplied share of the daily targets for one slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPercentage {
    pub slot: Slot,
    pub percentage: f64,
}

/// One slot's share of the daily targets after allocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAllocation {
    pub slot: Slot,
    pub percentage: f64,
    pub targets: MacroTargets,
}

/// One chosen meal in a generated daily plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub slot: Slot,
    pub meal: Meal,
    pub score: f64,
    pub slot_targets: MacroTargets,
}

/// A complete daily plan: one meal per requested slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub items: Vec<PlanItem>,

    /// Average of the item scores, in [0, 1].
    pub total_score: f64,

    /// Sum of the selected meals' nutrition.
    pub actual_macros: NutritionalInfo,

    /// The daily targets the plan was built against.
    pub target_macros: MacroTargets,
}
