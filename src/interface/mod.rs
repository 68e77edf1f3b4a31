pub mod prompts;
pub mod render;

pub use prompts::{confirm_exhaustive, prompt_yes_no};
pub use render::{
    describe_food, display_comparison, display_search_hits, display_selection, AlgorithmRun,
};
