pub mod catalog;
pub mod persistence;

pub use catalog::MealCatalog;
pub use persistence::{load_meals, save_meals, save_meals_csv};
