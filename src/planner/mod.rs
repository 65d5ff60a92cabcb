pub mod allocation;
pub mod constants;
pub mod daily;
pub mod filters;
pub mod matching;
pub mod optimizer;
pub mod scoring;

pub use allocation::allocate_slots;
pub use constants::{default_slot_percentages, PERCENTAGE_TOLERANCE};
pub use daily::{generate_daily_plan, PlanRequest};
pub use filters::{filter_meals, MealFilter};
pub use matching::{match_meals, MatchConstraints, MatchRequest};
pub use optimizer::{find_optimal_plan, OptimizedPlan};
pub use scoring::{calculate_deviation, calculate_score, score_macro};
