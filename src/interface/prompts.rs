use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{Allergen, DietaryTag, MacroTargets, MealCategory};

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for the day's macro targets.
pub fn prompt_daily_targets() -> Result<MacroTargets> {
    let calories = prompt_number("Daily calorie target (kcal)", "2000")?;
    let protein = prompt_number("Daily protein target (g)", "150")?;
    let carbs = prompt_number("Daily carb target (g)", "200")?;
    let fat = prompt_number("Daily fat target (g)", "70")?;

    let targets = MacroTargets {
        calories,
        protein,
        carbs,
        fat,
    };

    if !targets.is_valid() {
        return Err(PlannerError::InvalidInput(
            "Calories must be positive; macros must be non-negative".to_string(),
        ));
    }

    Ok(targets)
}

/// Prompt for a single-meal macro target (used when browsing matches).
pub fn prompt_meal_targets() -> Result<MacroTargets> {
    let calories = prompt_number("Meal calorie target (kcal)", "600")?;
    let protein = prompt_number("Meal protein target (g)", "40")?;
    let carbs = prompt_number("Meal carb target (g)", "60")?;
    let fat = prompt_number("Meal fat target (g)", "20")?;

    let targets = MacroTargets {
        calories,
        protein,
        carbs,
        fat,
    };

    if !targets.is_valid() {
        return Err(PlannerError::InvalidInput(
            "Calories must be positive; macros must be non-negative".to_string(),
        ));
    }

    Ok(targets)
}

/// Prompt for allergies with fuzzy matching against the known allergen set.
pub fn prompt_allergies() -> Result<Vec<Allergen>> {
    let mut allergies = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter an allergy to exclude (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        if let Ok(allergen) = input.parse::<Allergen>() {
            if !allergies.contains(&allergen) {
                allergies.push(allergen);
            }
            println!("Added: {}", allergen);
            continue;
        }

        // Fuzzy match as a fallback
        let best = Allergen::ALL
            .into_iter()
            .map(|a| (a, jaro_winkler(&input.to_lowercase(), a.as_str())))
            .max_by(|(_, x), (_, y)| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));

        match best {
            Some((allergen, similarity)) if similarity > 0.8 => {
                let accept = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", allergen))
                    .default(true)
                    .interact()?;
                if accept {
                    if !allergies.contains(&allergen) {
                        allergies.push(allergen);
                    }
                    println!("Added: {}", allergen);
                }
            }
            _ => {
                let known: Vec<&str> = Allergen::ALL.iter().map(|a| a.as_str()).collect();
                println!("Unknown allergen '{}'. Known: {}", input, known.join(", "));
            }
        }
    }

    Ok(allergies)
}

/// Prompt for dietary preferences as a multi-select over the known tags.
pub fn prompt_dietary_preferences() -> Result<Vec<DietaryTag>> {
    let labels: Vec<&str> = DietaryTag::ALL.iter().map(|t| t.as_str()).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Dietary preferences (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(chosen.into_iter().map(|i| DietaryTag::ALL[i]).collect())
}

/// Prompt for an optional category restriction.
pub fn prompt_category() -> Result<Option<MealCategory>> {
    let mut labels = vec!["any"];
    labels.extend(MealCategory::ALL.iter().map(|c| c.as_str()));

    let chosen = Select::new()
        .with_prompt("Restrict to a category?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(if chosen == 0 {
        None
    } else {
        Some(MealCategory::ALL[chosen - 1])
    })
}

/// Prompt for the maximum number of results to show.
pub fn prompt_limit() -> Result<usize> {
    let input: String = Input::new()
        .with_prompt("How many results?")
        .default("10".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Simple yes/no confirmation.
pub fn prompt_yes_no(question: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(question)
        .default(default)
        .interact()?)
}
