use clap::{Parser, Subcommand};

/// MealMatcher: macro-target meal matching and daily plan optimization.
#[derive(Parser, Debug)]
#[command(name = "meal_matcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal catalog file (JSON or CSV).
    #[arg(short, long, default_value = "meals.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a full-day plan: one optimized meal per slot.
    Plan,

    /// Rank individual meals against a macro target.
    Match,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
