use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Allergen, DietaryTag, Meal, NutritionalInfo};

/// Load meals from a catalog file, JSON or CSV by extension.
///
/// Deduplicates by id (last occurrence wins). Unknown categories, allergens,
/// or dietary tags are rejected here; the planner core never sees them.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let path = path.as_ref();
    let meals = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_meals_csv(path)?,
        _ => load_meals_json(path)?,
    };

    let mut seen: HashMap<String, Meal> = HashMap::new();
    for meal in meals {
        seen.insert(meal.id.clone(), meal);
    }

    let mut deduped: Vec<Meal> = seen.into_values().collect();
    deduped.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(deduped)
}

fn load_meals_json(path: &Path) -> Result<Vec<Meal>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_meals_csv(path: &Path) -> Result<Vec<Meal>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut meals = Vec::new();
    for record in reader.deserialize() {
        let record: CsvMealRecord = record?;
        meals.push(record.into_meal()?);
    }
    Ok(meals)
}

/// Save meals to a pretty-printed JSON file.
pub fn save_meals<P: AsRef<Path>>(path: P, meals: &[Meal]) -> Result<()> {
    let json = serde_json::to_string_pretty(meals)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save meals to a CSV file using the flat record layout.
pub fn save_meals_csv<P: AsRef<Path>>(path: P, meals: &[Meal]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for meal in meals {
        writer.serialize(CsvMealRecord::from_meal(meal))?;
    }
    writer.flush()?;
    Ok(())
}

/// Flat CSV row. Allergens and dietary tags are semicolon-separated.
#[derive(Debug, Serialize, Deserialize)]
struct CsvMealRecord {
    id: String,
    name: String,
    category: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    #[serde(default)]
    fiber: Option<f64>,
    #[serde(default)]
    sugar: Option<f64>,
    #[serde(default)]
    allergens: String,
    #[serde(default)]
    dietary_tags: String,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

fn parse_list<T: std::str::FromStr>(raw: &str) -> std::result::Result<Vec<T>, T::Err> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

impl CsvMealRecord {
    fn into_meal(self) -> Result<Meal> {
        let allergens: Vec<Allergen> = parse_list(&self.allergens)?;
        let dietary_tags: Vec<DietaryTag> = parse_list(&self.dietary_tags)?;

        Ok(Meal {
            id: self.id,
            name: self.name,
            category: self.category.parse()?,
            nutritional_info: NutritionalInfo {
                calories: self.calories,
                protein: self.protein,
                carbs: self.carbs,
                fat: self.fat,
                fiber: self.fiber,
                sugar: self.sugar,
            },
            allergens,
            dietary_tags,
            active: self.active,
            description: None,
        })
    }

    fn from_meal(meal: &Meal) -> Self {
        Self {
            id: meal.id.clone(),
            name: meal.name.clone(),
            category: meal.category.to_string(),
            calories: meal.nutritional_info.calories,
            protein: meal.nutritional_info.protein,
            carbs: meal.nutritional_info.carbs,
            fat: meal.nutritional_info.fat,
            fiber: meal.nutritional_info.fiber,
            sugar: meal.nutritional_info.sugar,
            allergens: meal
                .allergens
                .iter()
                .map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join(";"),
            dietary_tags: meal
                .dietary_tags
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(";"),
            active: meal.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::models::MealCategory;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn sample_meal(id: &str) -> Meal {
        Meal {
            id: id.to_string(),
            name: "Lentil Bowl".to_string(),
            category: MealCategory::Lunch,
            nutritional_info: NutritionalInfo {
                calories: 640.0,
                protein: 32.0,
                carbs: 80.0,
                fat: 18.0,
                fiber: Some(14.0),
                sugar: None,
            },
            allergens: vec![Allergen::Soy],
            dietary_tags: vec![DietaryTag::Vegan, DietaryTag::HighProtein],
            active: true,
            description: None,
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let file = Builder::new().suffix(".json").tempfile().unwrap();
        save_meals(file.path(), &[sample_meal("m1")]).unwrap();

        let loaded = load_meals(file.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "m1");
        assert_eq!(loaded[0].dietary_tags, vec![DietaryTag::Vegan, DietaryTag::HighProtein]);
    }

    #[test]
    fn test_csv_roundtrip() {
        let file = Builder::new().suffix(".csv").tempfile().unwrap();
        save_meals_csv(file.path(), &[sample_meal("m1"), sample_meal("m2")]).unwrap();

        let loaded = load_meals(file.path()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].allergens, vec![Allergen::Soy]);
        assert_eq!(loaded[0].nutritional_info.fiber, Some(14.0));
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let mut first = sample_meal("m1");
        first.name = "First".to_string();
        let mut second = sample_meal("m1");
        second.name = "Second".to_string();

        let file = Builder::new().suffix(".json").tempfile().unwrap();
        save_meals(file.path(), &[first, second]).unwrap();

        let loaded = load_meals(file.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Second");
    }

    #[test]
    fn test_unknown_allergen_rejected_at_load() {
        let csv = "id,name,category,calories,protein,carbs,fat,fiber,sugar,allergens,dietary_tags,active\n\
                   m1,Bad Meal,lunch,500,25,60,12,,,kryptonite,,true\n";

        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let err = load_meals(file.path()).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownAllergen(_)));
    }

    #[test]
    fn test_unknown_category_rejected_at_load() {
        let json = r#"[{"id": "m1", "name": "Bad", "category": "brunch",
            "nutritionalInfo": {"calories": 500, "protein": 25, "carbs": 60, "fat": 12}}]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_meals(file.path()).is_err());
    }
}
