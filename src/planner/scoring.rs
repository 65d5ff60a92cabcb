use crate::models::{MacroDeviation, MacroTargets, NutritionalInfo, ScoringWeights};

/// Score a single macro against its target, in [0, 1].
///
/// A zero target is a hard floor: only an actual of exactly 0 scores 1.0,
/// anything else scores 0.0. Otherwise the score falls linearly with
/// relative deviation and saturates at 0 once the deviation reaches 100%.
pub fn score_macro(actual: f64, target: f64) -> f64 {
    if target == 0.0 {
        return if actual == 0.0 { 1.0 } else { 0.0 };
    }

    let relative = ((actual - target).abs() / target).min(1.0);
    (1.0 - relative).max(0.0)
}

/// Weighted fit score of a meal's nutrition against a macro target, in [0, 1].
///
/// Weights are normalized by their sum; an all-zero weight set falls back to
/// the unweighted mean.
pub fn calculate_score(
    actual: &NutritionalInfo,
    target: &MacroTargets,
    weights: &ScoringWeights,
) -> f64 {
    let pairs = [
        (score_macro(actual.calories, target.calories), weights.calories),
        (score_macro(actual.protein, target.protein), weights.protein),
        (score_macro(actual.carbs, target.carbs), weights.carbs),
        (score_macro(actual.fat, target.fat), weights.fat),
    ];

    let weight_sum = weights.sum();
    if weight_sum == 0.0 {
        return pairs.iter().map(|(score, _)| score).sum::<f64>() / pairs.len() as f64;
    }

    pairs
        .iter()
        .map(|(score, weight)| score * weight)
        .sum::<f64>()
        / weight_sum
}

/// Absolute per-macro differences between actual nutrition and a target.
pub fn calculate_deviation(actual: &NutritionalInfo, target: &MacroTargets) -> MacroDeviation {
    MacroDeviation {
        calories: (actual.calories - target.calories).abs(),
        protein: (actual.protein - target.protein).abs(),
        carbs: (actual.carbs - target.carbs).abs(),
        fat: (actual.fat - target.fat).abs(),
    }
}
