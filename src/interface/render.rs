use crate::models::{PlanResult, ScoredMeal};

/// Display ranked match results in a formatted table.
pub fn display_scored_meals(results: &[ScoredMeal]) {
    if results.is_empty() {
        println!("No meals match your constraints. Try relaxing allergies or preferences.");
        return;
    }

    println!();
    println!("=== Matching Meals ===");
    println!();

    let max_name_len = results.iter().map(|r| r.meal.name.len()).max().unwrap_or(10);

    for (i, result) in results.iter().enumerate() {
        let n = &result.meal.nutritional_info;
        println!(
            "{:>3}. {:<width$}  {:>5.1}%  {:>5.0} cal  P:{:<5.1} C:{:<5.1} F:{:<5.1} (off by {:.0} cal)",
            i + 1,
            result.meal.name,
            result.score * 100.0,
            n.calories,
            n.protein,
            n.carbs,
            n.fat,
            result.deviation.calories,
            width = max_name_len
        );
    }

    println!();
}

/// Display a generated daily plan with a summary block.
pub fn display_plan(plan: &PlanResult) {
    println!();
    println!("=== Daily Plan ===");
    println!();

    let max_name_len = plan
        .items
        .iter()
        .map(|i| i.meal.name.len())
        .max()
        .unwrap_or(10);

    for item in &plan.items {
        println!(
            "{:<9}  {:<width$}  {:>5.1}%  {:>5.0} cal (slot target {:.0})",
            item.slot.to_string(),
            item.meal.name,
            item.score * 100.0,
            item.meal.nutritional_info.calories,
            item.slot_targets.calories,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Plan score: {:.1}%", plan.total_score * 100.0);
    println!(
        "Calories: {:.0} / {:.0}",
        plan.actual_macros.calories, plan.target_macros.calories
    );
    println!(
        "Protein:  {:.1} / {:.1} g",
        plan.actual_macros.protein, plan.target_macros.protein
    );
    println!(
        "Carbs:    {:.1} / {:.1} g",
        plan.actual_macros.carbs, plan.target_macros.carbs
    );
    println!(
        "Fat:      {:.1} / {:.1} g",
        plan.actual_macros.fat, plan.target_macros.fat
    );
    println!();
}
