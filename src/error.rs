use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("slot allocation requires at least one slot")]
    EmptySlots,

    #[error("slot percentages sum to {0:.3}, expected 1.0 (±0.01)")]
    InvalidPercentages(f64),

    #[error("unknown meal category: {0}")]
    UnknownCategory(String),

    #[error("unknown allergen: {0}")]
    UnknownAllergen(String),

    #[error("unknown dietary tag: {0}")]
    UnknownDietaryTag(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
