use crate::error::{PlannerError, Result};
use crate::models::{MacroTargets, SlotAllocation, SlotPercentage};
use crate::planner::constants::{round2, PERCENTAGE_TOLERANCE};

/// Split daily macro targets into per-slot sub-targets.
///
/// Each slot gets `daily * percentage` per macro, rounded to 2 decimals. The
/// last slot in input order absorbs the rounding residual, so the slot
/// targets always sum back to the daily targets exactly. Fails when no slots
/// are given or the percentages do not sum to 1.0 (±0.01).
pub fn allocate_slots(
    daily: &MacroTargets,
    slots: &[SlotPercentage],
) -> Result<Vec<SlotAllocation>> {
    if slots.is_empty() {
        return Err(PlannerError::EmptySlots);
    }

    let percentage_sum: f64 = slots.iter().map(|s| s.percentage).sum();
    if (percentage_sum - 1.0).abs() > PERCENTAGE_TOLERANCE {
        return Err(PlannerError::InvalidPercentages(percentage_sum));
    }

    let mut allocations = Vec::with_capacity(slots.len());
    let mut used = MacroTargets {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    for entry in &slots[..slots.len() - 1] {
        let targets = MacroTargets {
            calories: round2(daily.calories * entry.percentage),
            protein: round2(daily.protein * entry.percentage),
            carbs: round2(daily.carbs * entry.percentage),
            fat: round2(daily.fat * entry.percentage),
        };

        used.calories += targets.calories;
        used.protein += targets.protein;
        used.carbs += targets.carbs;
        used.fat += targets.fat;

        allocations.push(SlotAllocation {
            slot: entry.slot,
            percentage: entry.percentage,
            targets,
        });
    }

    // Last slot takes whatever is left so the per-slot sums reconcile.
    let last = &slots[slots.len() - 1];
    allocations.push(SlotAllocation {
        slot: last.slot,
        percentage: last.percentage,
        targets: MacroTargets {
            calories: round2(daily.calories - used.calories),
            protein: round2(daily.protein - used.protein),
            carbs: round2(daily.carbs - used.carbs),
            fat: round2(daily.fat - used.fat),
        },
    });

    Ok(allocations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slot;
    use crate::planner::constants::default_slot_percentages;

    fn daily() -> MacroTargets {
        MacroTargets {
            calories: 2000.0,
            protein: 150.0,
            carbs: 200.0,
            fat: 70.0,
        }
    }

    fn sum_targets(allocations: &[SlotAllocation]) -> MacroTargets {
        allocations.iter().fold(
            MacroTargets {
                calories: 0.0,
                protein: 0.0,
                carbs: 0.0,
                fat: 0.0,
            },
            |mut acc, a| {
                acc.calories += a.targets.calories;
                acc.protein += a.targets.protein;
                acc.carbs += a.targets.carbs;
                acc.fat += a.targets.fat;
                acc
            },
        )
    }

    #[test]
    fn test_default_split_reconciles_exactly() {
        let allocations = allocate_slots(&daily(), &default_slot_percentages()).unwrap();
        assert_eq!(allocations.len(), 4);

        let total = sum_targets(&allocations);
        assert!((total.calories - 2000.0).abs() < 0.1);
        assert!((total.protein - 150.0).abs() < 0.1);
        assert!((total.carbs - 200.0).abs() < 0.1);
        assert!((total.fat - 70.0).abs() < 0.1);
    }

    #[test]
    fn test_uneven_split_residual_goes_to_last_slot() {
        // 1/3 splits round unevenly; the dinner slot must absorb the drift.
        let slots = vec![
            SlotPercentage {
                slot: Slot::Breakfast,
                percentage: 1.0 / 3.0,
            },
            SlotPercentage {
                slot: Slot::Lunch,
                percentage: 1.0 / 3.0,
            },
            SlotPercentage {
                slot: Slot::Dinner,
                percentage: 1.0 / 3.0,
            },
        ];
        let odd = MacroTargets {
            calories: 100.0,
            protein: 10.0,
            carbs: 10.0,
            fat: 10.0,
        };

        let allocations = allocate_slots(&odd, &slots).unwrap();
        let total = sum_targets(&allocations);
        assert!((total.calories - 100.0).abs() < 0.1);

        // First two slots got the plain rounded share.
        assert!((allocations[0].targets.calories - 33.33).abs() < 1e-9);
        assert!((allocations[1].targets.calories - 33.33).abs() < 1e-9);
        assert!((allocations[2].targets.calories - 33.34).abs() < 1e-9);
    }

    #[test]
    fn test_single_slot_gets_everything() {
        let slots = vec![SlotPercentage {
            slot: Slot::Lunch,
            percentage: 1.0,
        }];
        let allocations = allocate_slots(&daily(), &slots).unwrap();
        assert_eq!(allocations.len(), 1);
        assert_eq!(allocations[0].targets.calories, 2000.0);
    }

    #[test]
    fn test_empty_slots_rejected() {
        assert!(matches!(
            allocate_slots(&daily(), &[]),
            Err(PlannerError::EmptySlots)
        ));
    }

    #[test]
    fn test_bad_percentage_sums_rejected() {
        for bad_sum in [0.5, 1.5] {
            let slots = vec![
                SlotPercentage {
                    slot: Slot::Lunch,
                    percentage: bad_sum / 2.0,
                },
                SlotPercentage {
                    slot: Slot::Dinner,
                    percentage: bad_sum / 2.0,
                },
            ];
            assert!(matches!(
                allocate_slots(&daily(), &slots),
                Err(PlannerError::InvalidPercentages(_))
            ));
        }
    }

    #[test]
    fn test_sum_within_tolerance_accepted() {
        let slots = vec![
            SlotPercentage {
                slot: Slot::Lunch,
                percentage: 0.503,
            },
            SlotPercentage {
                slot: Slot::Dinner,
                percentage: 0.50,
            },
        ];
        assert!(allocate_slots(&daily(), &slots).is_ok());
    }
}
