use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Time-of-day bucket a meal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealCategory {
    pub const ALL: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snack,
    ];

    /// The plan slot meals of this category can fill.
    ///
    /// Categories and slots share one vocabulary today; the mapping is kept
    /// as an explicit function so the two enums can diverge without slot
    /// assignment silently breaking.
    pub fn slot(self) -> Slot {
        match self {
            MealCategory::Breakfast => Slot::Breakfast,
            MealCategory::Lunch => Slot::Lunch,
            MealCategory::Dinner => Slot::Dinner,
            MealCategory::Snack => Slot::Snack,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snack => "snack",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealCategory {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealCategory::Breakfast),
            "lunch" => Ok(MealCategory::Lunch),
            "dinner" => Ok(MealCategory::Dinner),
            "snack" => Ok(MealCategory::Snack),
            other => Err(PlannerError::UnknownCategory(other.to_string())),
        }
    }
}

/// A named time-of-day bucket in a daily plan, filled by exactly one meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Breakfast, Slot::Lunch, Slot::Dinner, Slot::Snack];

    /// Inverse of [`MealCategory::slot`].
    pub fn category(self) -> MealCategory {
        match self {
            Slot::Breakfast => MealCategory::Breakfast,
            Slot::Lunch => MealCategory::Lunch,
            Slot::Dinner => MealCategory::Dinner,
            Slot::Snack => MealCategory::Snack,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.category().as_str()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allergen tags recognized by the catalog.
///
/// Unknown values are rejected when a catalog is loaded, not inside the
/// filter core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Gluten,
    Dairy,
    Eggs,
    Peanuts,
    TreeNuts,
    Soy,
    Fish,
    Shellfish,
    Sesame,
}

impl Allergen {
    pub const ALL: [Allergen; 9] = [
        Allergen::Gluten,
        Allergen::Dairy,
        Allergen::Eggs,
        Allergen::Peanuts,
        Allergen::TreeNuts,
        Allergen::Soy,
        Allergen::Fish,
        Allergen::Shellfish,
        Allergen::Sesame,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Allergen::Gluten => "gluten",
            Allergen::Dairy => "dairy",
            Allergen::Eggs => "eggs",
            Allergen::Peanuts => "peanuts",
            Allergen::TreeNuts => "tree_nuts",
            Allergen::Soy => "soy",
            Allergen::Fish => "fish",
            Allergen::Shellfish => "shellfish",
            Allergen::Sesame => "sesame",
        }
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Allergen {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Allergen::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| PlannerError::UnknownAllergen(s.trim().to_string()))
    }
}

/// Dietary tags a meal can carry (e.g. "vegan", "gluten-free").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    Keto,
    Paleo,
    LowCarb,
    HighProtein,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 8] = [
        DietaryTag::Vegetarian,
        DietaryTag::Vegan,
        DietaryTag::GlutenFree,
        DietaryTag::DairyFree,
        DietaryTag::Keto,
        DietaryTag::Paleo,
        DietaryTag::LowCarb,
        DietaryTag::HighProtein,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::DairyFree => "dairy-free",
            DietaryTag::Keto => "keto",
            DietaryTag::Paleo => "paleo",
            DietaryTag::LowCarb => "low-carb",
            DietaryTag::HighProtein => "high-protein",
        }
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryTag {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        DietaryTag::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| PlannerError::UnknownDietaryTag(s.trim().to_string()))
    }
}

/// Actual nutrition of a single meal or a summed plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
}

impl NutritionalInfo {
    pub fn zero() -> Self {
        Self {
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: None,
            sugar: None,
        }
    }

    /// Element-wise sum. Optional nutrients stay present if either side has
    /// them.
    pub fn add(&self, other: &NutritionalInfo) -> Self {
        let add_opt = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(x), Some(y)) => Some(x + y),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };

        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: add_opt(self.fiber, other.fiber),
            sugar: add_opt(self.sugar, other.sugar),
        }
    }

    /// Basic validation: all values non-negative.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
            && self.fiber.is_none_or(|v| v >= 0.0)
            && self.sugar.is_none_or(|v| v >= 0.0)
    }
}

/// A daily or per-slot nutritional goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroTargets {
    /// Basic validation: positive calories, non-negative macros.
    pub fn is_valid(&self) -> bool {
        self.calories > 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }
}

/// Per-macro scoring weights. Need not sum to 1; normalized when scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.calories + self.protein + self.carbs + self.fat
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            calories: 0.4,
            protein: 0.3,
            carbs: 0.15,
            fat: 0.15,
        }
    }
}

/// A catalog meal. Immutable once loaded; the engine never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub category: MealCategory,
    pub nutritional_info: NutritionalInfo,

    #[serde(default)]
    pub allergens: Vec<Allergen>,

    #[serde(default)]
    pub dietary_tags: Vec<DietaryTag>,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Meal {
    pub fn contains_allergen(&self, allergen: Allergen) -> bool {
        self.allergens.contains(&allergen)
    }

    /// True only when the meal carries every listed tag.
    pub fn has_all_tags(&self, tags: &[DietaryTag]) -> bool {
        tags.iter().all(|t| self.dietary_tags.contains(t))
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} cal, P:{} C:{} F:{}",
            self.name,
            self.category,
            self.nutritional_info.calories,
            self.nutritional_info.protein,
            self.nutritional_info.carbs,
            self.nutritional_info.fat
        )
    }
}

impl PartialEq for Meal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Meal {}

impl std::hash::Hash for Meal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
