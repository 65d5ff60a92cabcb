use crate::models::{Slot, SlotPercentage};

/// Default share of the daily targets per slot.
pub const DEFAULT_BREAKFAST_PCT: f64 = 0.25;
pub const DEFAULT_LUNCH_PCT: f64 = 0.35;
pub const DEFAULT_DINNER_PCT: f64 = 0.30;
pub const DEFAULT_SNACK_PCT: f64 = 0.10;

/// Allowed drift of a slot-percentage sum from 1.0.
pub const PERCENTAGE_TOLERANCE: f64 = 0.01;

/// Guard band for float comparisons in the plan search.
pub const SCORE_EPSILON: f64 = 1e-9;

/// A plan at this score cannot be improved; the search stops early.
pub const PERFECT_SCORE: f64 = 1.0;

/// The standard four-slot split used when the caller supplies none.
pub fn default_slot_percentages() -> Vec<SlotPercentage> {
    vec![
        SlotPercentage {
            slot: Slot::Breakfast,
            percentage: DEFAULT_BREAKFAST_PCT,
        },
        SlotPercentage {
            slot: Slot::Lunch,
            percentage: DEFAULT_LUNCH_PCT,
        },
        SlotPercentage {
            slot: Slot::Dinner,
            percentage: DEFAULT_DINNER_PCT,
        },
        SlotPercentage {
            slot: Slot::Snack,
            percentage: DEFAULT_SNACK_PCT,
        },
    ]
}

/// Round a value to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_percentages_sum_to_one() {
        let sum: f64 = default_slot_percentages()
            .iter()
            .map(|s| s.percentage)
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(499.999), 500.0);
        assert_eq!(round2(-0.125), -0.13);
    }
}
