pub mod catalog;
pub mod cli;
pub mod error;
pub mod experiment;
pub mod interface;
pub mod models;
pub mod optimizer;

pub use catalog::FoodCatalog;
pub use error::{ProteinError, Result};
pub use models::{Food, Selection, Totals};
pub use optimizer::{aggregate, select_exhaustive, select_greedy};
