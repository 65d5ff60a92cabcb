use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Meal, PlanItem, ScoringWeights, Slot, SlotAllocation};
use crate::planner::constants::{PERFECT_SCORE, SCORE_EPSILON};
use crate::planner::scoring::calculate_score;

/// Candidate meal pre-scored against its slot's targets.
#[derive(Debug)]
struct Candidate<'a> {
    meal: &'a Meal,
    score: f64,
}

/// The optimizer's output: one item per slot plus the maximized average.
#[derive(Debug, Clone)]
pub struct OptimizedPlan {
    pub items: Vec<PlanItem>,
    pub total_score: f64,
}

/// Search state for one optimization call. Never shared across calls.
struct Search<'a, 'p> {
    pools: &'p [Vec<Candidate<'a>>],
    slot_count: usize,
    path: Vec<usize>,
    best: Option<(f64, Vec<usize>)>,
}

impl Search<'_, '_> {
    fn best_score(&self) -> f64 {
        self.best.as_ref().map_or(f64::NEG_INFINITY, |(s, _)| *s)
    }

    fn is_perfect(&self) -> bool {
        self.best_score() >= PERFECT_SCORE - SCORE_EPSILON
    }

    /// Depth-first branch-and-bound over slots.
    ///
    /// `running_sum` is the sum of the scores chosen so far. Candidates are
    /// pre-sorted descending, so once the per-candidate bound fails no later
    /// candidate in the slot can succeed either.
    fn descend(&mut self, depth: usize, running_sum: f64) {
        if depth == self.slot_count {
            let average = running_sum / self.slot_count as f64;
            if average > self.best_score() {
                self.best = Some((average, self.path.clone()));
            }
            return;
        }

        if self.is_perfect() {
            return;
        }

        let remaining = (self.slot_count - depth) as f64;

        // Upper bound: every remaining slot scores a perfect 1.0.
        let optimistic = (running_sum + remaining) / self.slot_count as f64;
        if optimistic <= self.best_score() + SCORE_EPSILON {
            return;
        }

        let pool = self.pools;
        for (index, candidate) in pool[depth].iter().enumerate() {
            // Tighter bound with this candidate's actual score in place.
            let bound =
                (running_sum + candidate.score + (remaining - 1.0)) / self.slot_count as f64;
            if bound <= self.best_score() + SCORE_EPSILON {
                break;
            }

            self.path.push(index);
            self.descend(depth + 1, running_sum + candidate.score);
            self.path.pop();

            if self.is_perfect() {
                return;
            }
        }
    }
}

/// Choose one meal per slot maximizing the average per-slot fit score.
///
/// Each slot's candidates are scored against that slot's own targets, not
/// the daily aggregate. Returns `None` as soon as any required slot has no
/// candidates; with non-empty pools the search is exact and pruning affects
/// runtime only, never the result.
pub fn find_optimal_plan(
    allocations: &[SlotAllocation],
    meals_by_slot: &HashMap<Slot, Vec<&Meal>>,
    weights: &ScoringWeights,
) -> Option<OptimizedPlan> {
    if allocations.is_empty() {
        return None;
    }

    let mut pools: Vec<Vec<Candidate>> = Vec::with_capacity(allocations.len());
    for allocation in allocations {
        let slot_meals = meals_by_slot.get(&allocation.slot)?;
        if slot_meals.is_empty() {
            return None;
        }

        let mut candidates: Vec<Candidate> = slot_meals
            .iter()
            .map(|&meal| Candidate {
                meal,
                score: calculate_score(&meal.nutritional_info, &allocation.targets, weights),
            })
            .collect();

        // Best candidate first; id tie-break keeps the search deterministic.
        candidates.sort_by(|a, b| match b.score.partial_cmp(&a.score) {
            Some(Ordering::Equal) | None => a.meal.id.cmp(&b.meal.id),
            Some(ordering) => ordering,
        });
        pools.push(candidates);
    }

    let mut search = Search {
        pools: &pools,
        slot_count: pools.len(),
        path: Vec::with_capacity(pools.len()),
        best: None,
    };
    search.descend(0, 0.0);

    let (total_score, best_path) = search.best?;
    let items = best_path
        .iter()
        .enumerate()
        .map(|(slot_index, &candidate_index)| {
            let candidate = &pools[slot_index][candidate_index];
            let allocation = &allocations[slot_index];
            PlanItem {
                slot: allocation.slot,
                meal: candidate.meal.clone(),
                score: candidate.score,
                slot_targets: allocation.targets,
            }
        })
        .collect();

    Some(OptimizedPlan { items, total_score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MacroTargets, MealCategory, NutritionalInfo};

    fn meal(id: &str, category: MealCategory, calories: f64, protein: f64) -> Meal {
        Meal {
            id: id.to_string(),
            name: id.to_string(),
            category,
            nutritional_info: NutritionalInfo {
                calories,
                protein,
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

    fn allocation(slot: Slot, calories: f64) -> SlotAllocation {
        SlotAllocation {
            slot,
            percentage: 0.5,
            targets: MacroTargets {
                calories,
                protein: 30.0,
                carbs: 50.0,
                fat: 15.0,
            },
        }
    }

    #[test]
    fn test_empty_pool_is_infeasible() {
        let allocations = vec![allocation(Slot::Lunch, 600.0)];
        let meals_by_slot: HashMap<Slot, Vec<&Meal>> = HashMap::new();
        assert!(find_optimal_plan(&allocations, &meals_by_slot, &ScoringWeights::default()).is_none());
    }

    #[test]
    fn test_forced_assignment() {
        let lunch = meal("l1", MealCategory::Lunch, 610.0, 28.0);
        let dinner = meal("d1", MealCategory::Dinner, 580.0, 35.0);
        let allocations = vec![
            allocation(Slot::Lunch, 600.0),
            allocation(Slot::Dinner, 600.0),
        ];
        let mut meals_by_slot: HashMap<Slot, Vec<&Meal>> = HashMap::new();
        meals_by_slot.insert(Slot::Lunch, vec![&lunch]);
        meals_by_slot.insert(Slot::Dinner, vec![&dinner]);

        let weights = ScoringWeights::default();
        let plan = find_optimal_plan(&allocations, &meals_by_slot, &weights).unwrap();

        assert_eq!(plan.items.len(), 2);
        assert_eq!(plan.items[0].meal.id, "l1");
        assert_eq!(plan.items[1].meal.id, "d1");

        let expected = (calculate_score(&lunch.nutritional_info, &allocations[0].targets, &weights)
            + calculate_score(&dinner.nutritional_info, &allocations[1].targets, &weights))
            / 2.0;
        assert!((plan.total_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_picks_jointly_best_combination() {
        // Lunch pool has a clear winner; dinner pool's best must still be
        // found behind it.
        let l_good = meal("l_good", MealCategory::Lunch, 600.0, 30.0);
        let l_bad = meal("l_bad", MealCategory::Lunch, 900.0, 10.0);
        let d_good = meal("d_good", MealCategory::Dinner, 595.0, 31.0);
        let d_bad = meal("d_bad", MealCategory::Dinner, 1200.0, 5.0);

        let allocations = vec![
            allocation(Slot::Lunch, 600.0),
            allocation(Slot::Dinner, 600.0),
        ];
        let mut meals_by_slot: HashMap<Slot, Vec<&Meal>> = HashMap::new();
        meals_by_slot.insert(Slot::Lunch, vec![&l_bad, &l_good]);
        meals_by_slot.insert(Slot::Dinner, vec![&d_bad, &d_good]);

        let plan =
            find_optimal_plan(&allocations, &meals_by_slot, &ScoringWeights::default()).unwrap();
        assert_eq!(plan.items[0].meal.id, "l_good");
        assert_eq!(plan.items[1].meal.id, "d_good");
    }

    #[test]
    fn test_exactness_against_brute_force() {
        let lunches: Vec<Meal> = (0..6)
            .map(|i| meal(&format!("l{i}"), MealCategory::Lunch, 450.0 + 60.0 * i as f64, 20.0 + 3.0 * i as f64))
            .collect();
        let dinners: Vec<Meal> = (0..6)
            .map(|i| meal(&format!("d{i}"), MealCategory::Dinner, 400.0 + 75.0 * i as f64, 15.0 + 4.0 * i as f64))
            .collect();

        let allocations = vec![
            allocation(Slot::Lunch, 620.0),
            allocation(Slot::Dinner, 640.0),
        ];
        let mut meals_by_slot: HashMap<Slot, Vec<&Meal>> = HashMap::new();
        meals_by_slot.insert(Slot::Lunch, lunches.iter().collect());
        meals_by_slot.insert(Slot::Dinner, dinners.iter().collect());

        let weights = ScoringWeights::default();
        let plan = find_optimal_plan(&allocations, &meals_by_slot, &weights).unwrap();

        let mut brute_best = f64::NEG_INFINITY;
        for lunch in &lunches {
            for dinner in &dinners {
                let average = (calculate_score(
                    &lunch.nutritional_info,
                    &allocations[0].targets,
                    &weights,
                ) + calculate_score(
                    &dinner.nutritional_info,
                    &allocations[1].targets,
                    &weights,
                )) / 2.0;
                brute_best = brute_best.max(average);
            }
        }

        assert!((plan.total_score - brute_best).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounds() {
        let lunch = meal("l1", MealCategory::Lunch, 610.0, 28.0);
        let allocations = vec![allocation(Slot::Lunch, 600.0)];
        let mut meals_by_slot: HashMap<Slot, Vec<&Meal>> = HashMap::new();
        meals_by_slot.insert(Slot::Lunch, vec![&lunch]);

        let plan =
            find_optimal_plan(&allocations, &meals_by_slot, &ScoringWeights::default()).unwrap();
        assert!((0.0..=1.0).contains(&plan.total_score));
    }
}
