pub mod measure;
pub mod output;
pub mod synthetic;

pub use measure::{measure, run_experiment, ExperimentConfig, Measurement};
pub use output::{print_measurements, write_csv, write_summary_json};
pub use synthetic::synthetic_catalog;
