pub mod food;
pub mod selection;

pub use food::Food;
pub use selection::{Selection, Totals};
