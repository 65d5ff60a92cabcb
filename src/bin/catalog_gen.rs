use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meal_matcher_rs::error::Result;
use meal_matcher_rs::models::{Allergen, DietaryTag, Meal, MealCategory, NutritionalInfo};
use meal_matcher_rs::state::{save_meals, save_meals_csv};

/// Generate a synthetic meal catalog for demos and benchmarks.
#[derive(Parser, Debug)]
#[command(name = "catalog_gen")]
#[command(about = "Generate a synthetic meal catalog (JSON or CSV by extension)")]
struct Args {
    /// Meals to generate per category.
    #[arg(long, default_value_t = 50)]
    per_category: usize,

    /// RNG seed; the same seed always produces the same catalog.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output path; a .csv extension switches to CSV output.
    #[arg(short, long, default_value = "meals.json")]
    out: PathBuf,
}

/// Calorie range per category, roughly matching real menu composition.
fn calorie_range(category: MealCategory) -> (f64, f64) {
    match category {
        MealCategory::Breakfast => (250.0, 650.0),
        MealCategory::Lunch => (400.0, 900.0),
        MealCategory::Dinner => (350.0, 850.0),
        MealCategory::Snack => (100.0, 350.0),
    }
}

fn name_parts(category: MealCategory) -> (&'static [&'static str], &'static [&'static str]) {
    match category {
        MealCategory::Breakfast => (
            &["Oat", "Egg", "Berry", "Maple", "Sunrise", "Granola", "Yogurt"],
            &["Bowl", "Scramble", "Parfait", "Stack", "Wrap"],
        ),
        MealCategory::Lunch => (
            &["Chicken", "Quinoa", "Harvest", "Tuscan", "Garden", "Citrus", "Sesame"],
            &["Salad", "Bowl", "Sandwich", "Wrap", "Plate"],
        ),
        MealCategory::Dinner => (
            &["Salmon", "Bistro", "Roasted", "Herb", "Smoky", "Miso", "Peppercorn"],
            &["Plate", "Skillet", "Roast", "Curry", "Stir-Fry"],
        ),
        MealCategory::Snack => (
            &["Trail", "Protein", "Cocoa", "Almond", "Apple", "Chia"],
            &["Mix", "Bites", "Bar", "Cup", "Pack"],
        ),
    }
}

fn generate_meal(rng: &mut StdRng, category: MealCategory, index: usize) -> Meal {
    let (low, high) = calorie_range(category);
    let calories = (rng.gen_range(low..high) / 5.0).round() * 5.0;

    // Macro split: protein 12-35%, fat 20-40% of calories, carbs the rest.
    let protein_share: f64 = rng.gen_range(0.12..0.35);
    let fat_share: f64 = rng.gen_range(0.20..0.40);
    let carb_share: f64 = (1.0 - protein_share - fat_share).max(0.0);

    let protein = (calories * protein_share / 4.0).round();
    let fat = (calories * fat_share / 9.0).round();
    let carbs = (calories * carb_share / 4.0).round();

    let mut allergens = Vec::new();
    for allergen in Allergen::ALL {
        if rng.gen_bool(0.08) {
            allergens.push(allergen);
        }
    }

    let mut dietary_tags = Vec::new();
    for tag in DietaryTag::ALL {
        if rng.gen_bool(0.12) {
            dietary_tags.push(tag);
        }
    }

    let (adjectives, forms) = name_parts(category);
    let adjective = adjectives[rng.gen_range(0..adjectives.len())];
    let form = forms[rng.gen_range(0..forms.len())];
    let name = format!("{} {} #{}", adjective, form, index + 1);

    Meal {
        id: format!("{}-{:03}", category, index + 1),
        name,
        category,
        nutritional_info: NutritionalInfo {
            calories,
            protein,
            carbs,
            fat,
            fiber: if rng.gen_bool(0.6) {
                Some(rng.gen_range(1.0..15.0_f64).round())
            } else {
                None
            },
            sugar: if rng.gen_bool(0.6) {
                Some(rng.gen_range(1.0..25.0_f64).round())
            } else {
                None
            },
        },
        allergens,
        dietary_tags,
        active: rng.gen_bool(0.95),
        description: None,
    }
}

fn run(args: &Args) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut meals = Vec::with_capacity(args.per_category * MealCategory::ALL.len());
    for category in MealCategory::ALL {
        for index in 0..args.per_category {
            meals.push(generate_meal(&mut rng, category, index));
        }
    }

    match args.out.extension().and_then(|e| e.to_str()) {
        Some("csv") => save_meals_csv(&args.out, &meals)?,
        _ => save_meals(&args.out, &meals)?,
    }

    println!(
        "Wrote {} meals ({} per category) to {:?}",
        meals.len(),
        args.per_category,
        args.out
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
