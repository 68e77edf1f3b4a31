pub mod aggregate;
pub mod constants;
pub mod exhaustive;
pub mod greedy;

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::models::{Food, Selection};

pub use aggregate::aggregate;
pub use constants::*;
pub use exhaustive::select_exhaustive;
pub use greedy::select_greedy;

/// Selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Greedy,
    Exhaustive,
}

impl Algorithm {
    /// Run this strategy over `catalog`.
    pub fn run(self, catalog: &[Food], budget: u32) -> Result<Selection<'_>> {
        match self {
            Algorithm::Greedy => Ok(select_greedy(catalog, budget)),
            Algorithm::Exhaustive => select_exhaustive(catalog, budget),
        }
    }

    /// Whether this strategy can handle a catalog of `len` foods.
    pub fn supports(self, len: usize) -> bool {
        match self {
            Algorithm::Greedy => true,
            Algorithm::Exhaustive => len <= MAX_EXHAUSTIVE_ITEMS,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Greedy => write!(f, "greedy"),
            Algorithm::Exhaustive => write!(f, "exhaustive"),
        }
    }
}
