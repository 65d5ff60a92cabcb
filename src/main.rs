use clap::Parser;
use std::path::Path;

use meal_matcher_rs::cli::{Cli, Command};
use meal_matcher_rs::error::Result;
use meal_matcher_rs::interface::{
    display_plan, display_scored_meals, prompt_allergies, prompt_category, prompt_daily_targets,
    prompt_dietary_preferences, prompt_limit, prompt_meal_targets,
};
use meal_matcher_rs::models::MealCategory;
use meal_matcher_rs::planner::{
    default_slot_percentages, generate_daily_plan, match_meals, MatchConstraints, MatchRequest,
    PlanRequest,
};
use meal_matcher_rs::state::{load_meals, MealCatalog};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.file),
        Command::Match => cmd_match(&cli.file),
    }
}

fn load_catalog(file_path: &str) -> Result<Option<MealCatalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Meal catalog not found: {}", file_path);
        eprintln!("Generate a demo catalog with the catalog_gen binary.");
        return Ok(None);
    }

    let catalog = MealCatalog::new(load_meals(path)?);
    println!("Loaded {} meals", catalog.len());

    let counts = catalog.count_by_category();
    let summary: Vec<String> = MealCategory::ALL
        .iter()
        .map(|c| format!("{}: {}", c, counts.get(c).copied().unwrap_or(0)))
        .collect();
    println!("Active by category: {}", summary.join(", "));
    println!();

    Ok(Some(catalog))
}

/// Build a full-day plan from interactive constraints.
fn cmd_plan(file_path: &str) -> Result<()> {
    let Some(catalog) = load_catalog(file_path)? else {
        return Ok(());
    };

    let daily_targets = prompt_daily_targets()?;
    let allergies = prompt_allergies()?;
    let dietary_preferences = prompt_dietary_preferences()?;

    println!();
    println!(
        "Planning a day for {:.0} kcal / {:.0}P / {:.0}C / {:.0}F...",
        daily_targets.calories, daily_targets.protein, daily_targets.carbs, daily_targets.fat
    );
    println!();

    let request = PlanRequest {
        daily_targets,
        slots: default_slot_percentages(),
        allergies,
        dietary_preferences,
        weights: None,
    };

    let meals = catalog.active_meals();
    match generate_daily_plan(&meals, &request)? {
        Some(plan) => display_plan(&plan),
        None => {
            println!("No plan possible: at least one slot has no eligible meals.");
            println!("Try relaxing allergies or dietary preferences.");
        }
    }

    Ok(())
}

/// Rank meals near an interactive macro target.
fn cmd_match(file_path: &str) -> Result<()> {
    let Some(catalog) = load_catalog(file_path)? else {
        return Ok(());
    };

    let targets = prompt_meal_targets()?;
    let allergies = prompt_allergies()?;
    let dietary_preferences = prompt_dietary_preferences()?;
    let category = prompt_category()?;
    let limit = prompt_limit()?;

    let request = MatchRequest {
        constraints: MatchConstraints {
            targets,
            weights: None,
        },
        allergies,
        dietary_preferences,
        category,
        limit,
    };

    let meals = catalog.active_meals();
    display_scored_meals(&match_meals(&meals, &request));

    Ok(())
}
