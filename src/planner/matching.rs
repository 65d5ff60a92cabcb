use std::cmp::Ordering;

use crate::models::{
    Allergen, DietaryTag, MacroTargets, Meal, MealCategory, ScoredMeal, ScoringWeights,
};
use crate::planner::filters::{filter_meals, MealFilter};
use crate::planner::scoring::{calculate_deviation, calculate_score};

/// Target and optional weight override for a match request.
#[derive(Debug, Clone)]
pub struct MatchConstraints {
    pub targets: MacroTargets,
    pub weights: Option<ScoringWeights>,
}

/// A "find meals near my target" browse request.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub constraints: MatchConstraints,
    pub allergies: Vec<Allergen>,
    pub dietary_preferences: Vec<DietaryTag>,
    pub category: Option<MealCategory>,
    pub limit: usize,
}

/// Filter then rank meals against a single macro target.
///
/// Results are sorted by score descending, ties broken by meal id ascending
/// so equal-scoring catalogs rank deterministically, and truncated to
/// `limit`. An empty or fully-filtered catalog yields an empty list.
pub fn match_meals(meals: &[Meal], request: &MatchRequest) -> Vec<ScoredMeal> {
    let filter = MealFilter {
        allergies: &request.allergies,
        dietary_preferences: &request.dietary_preferences,
        category: request.category,
    };
    let weights = request.constraints.weights.unwrap_or_default();
    let targets = &request.constraints.targets;

    let mut scored: Vec<ScoredMeal> = filter_meals(meals, &filter)
        .into_iter()
        .map(|meal| ScoredMeal {
            score: calculate_score(&meal.nutritional_info, targets, &weights),
            deviation: calculate_deviation(&meal.nutritional_info, targets),
            meal: meal.clone(),
        })
        .collect();

    scored.sort_by(|a, b| match b.score.partial_cmp(&a.score) {
        Some(Ordering::Equal) | None => a.meal.id.cmp(&b.meal.id),
        Some(ordering) => ordering,
    });
    scored.truncate(request.limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionalInfo;

    fn meal(id: &str, calories: f64) -> Meal {
        Meal {
            id: id.to_string(),
            name: id.to_string(),
            category: MealCategory::Lunch,
            nutritional_info: NutritionalInfo {
                calories,
                protein: 30.0,
                carbs: 50.0,
                fat: 15.0,
                fiber: None,
                sugar: None,
            },
            allergens: vec![],
            dietary_tags: vec![],
            active: true,
            description: None,
        }
    }

    fn request(limit: usize) -> MatchRequest {
        MatchRequest {
            constraints: MatchConstraints {
                targets: MacroTargets {
                    calories: 500.0,
                    protein: 30.0,
                    carbs: 50.0,
                    fat: 15.0,
                },
                weights: None,
            },
            allergies: vec![],
            dietary_preferences: vec![],
            category: None,
            limit,
        }
    }

    #[test]
    fn test_results_sorted_by_score_descending() {
        let meals = vec![meal("far", 900.0), meal("near", 510.0), meal("exact", 500.0)];
        let results = match_meals(&meals, &request(10));

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].meal.id, "exact");
        assert_eq!(results[1].meal.id, "near");
        assert_eq!(results[2].meal.id, "far");
        for window in results.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn test_ties_broken_by_id() {
        // Identical nutrition scores identically; ids decide the order.
        let meals = vec![meal("zeta", 500.0), meal("alpha", 500.0), meal("mid", 500.0)];
        let results = match_meals(&meals, &request(10));
        let ids: Vec<&str> = results.iter().map(|r| r.meal.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_limit_truncates() {
        let meals: Vec<Meal> = (0..20).map(|i| meal(&format!("m{i:02}"), 500.0)).collect();
        let results = match_meals(&meals, &request(5));
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_empty_catalog_yields_empty() {
        assert!(match_meals(&[], &request(10)).is_empty());
    }
}
