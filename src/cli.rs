use clap::{Args, Parser, Subcommand};

use crate::catalog::DEFAULT_SEARCH_LIMIT;
use crate::optimizer::constants::{
    DEFAULT_BUDGET_KCAL, DEFAULT_CATALOG_SIZE, DEFAULT_MAX_KCAL, DEFAULT_MIN_KCAL,
};

/// MaxProtein — pick the foods with the most protein that fit a calorie budget.
#[derive(Parser, Debug)]
#[command(name = "maxprotein")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the nutrition database (USDA ABBREV text, or a .json catalog).
    #[arg(short, long, default_value = "ABBREV.txt", global = true)]
    pub database: String,

    /// Show debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Which foods from the database to optimize over.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Exclusive lower calorie bound per food.
    #[arg(long, default_value_t = DEFAULT_MIN_KCAL)]
    pub min_kcal: u32,

    /// Inclusive upper calorie bound per food.
    #[arg(long, default_value_t = DEFAULT_MAX_KCAL)]
    pub max_kcal: u32,

    /// Keep only the first N matching foods.
    #[arg(short = 'n', long, default_value_t = DEFAULT_CATALOG_SIZE)]
    pub size: usize,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            min_kcal: DEFAULT_MIN_KCAL,
            max_kcal: DEFAULT_MAX_KCAL,
            size: DEFAULT_CATALOG_SIZE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose foods with the greedy heuristic.
    Greedy {
        #[command(flatten)]
        filter: FilterArgs,

        /// Calorie budget.
        #[arg(short, long, default_value_t = DEFAULT_BUDGET_KCAL)]
        budget: u32,
    },

    /// Choose the optimal foods by trying every subset.
    Exhaustive {
        #[command(flatten)]
        filter: FilterArgs,

        /// Calorie budget.
        #[arg(short, long, default_value_t = DEFAULT_BUDGET_KCAL)]
        budget: u32,

        /// Skip the confirmation prompt for large catalogs.
        #[arg(short, long)]
        yes: bool,
    },

    /// Run both algorithms and compare them.
    Compare {
        #[command(flatten)]
        filter: FilterArgs,

        /// Calorie budget.
        #[arg(short, long, default_value_t = DEFAULT_BUDGET_KCAL)]
        budget: u32,
    },

    /// Look up foods in the database by description.
    Search {
        /// Text to look for.
        query: String,

        /// Maximum number of matches.
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Write the filtered catalog to a JSON file.
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output path.
        #[arg(short, long)]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Compare {
            filter: FilterArgs::default(),
            budget: DEFAULT_BUDGET_KCAL,
        }
    }
}
