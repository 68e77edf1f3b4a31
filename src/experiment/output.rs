use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::experiment::measure::{ExperimentConfig, Measurement};

/// Write all measurements to a CSV file.
pub fn write_csv(measurements: &[Measurement], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "algorithm",
        "n",
        "budget",
        "repeats",
        "best_secs",
        "mean_secs",
        "selected",
        "kcal",
        "protein_g",
    ])?;

    for m in measurements {
        wtr.write_record([
            m.algorithm.to_string(),
            m.size.to_string(),
            m.budget.to_string(),
            m.repeats.to_string(),
            format!("{:.9}", m.best_secs),
            format!("{:.9}", m.mean_secs),
            m.selected.to_string(),
            m.kcal.to_string(),
            m.protein_g.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the experiment settings and measurements to a JSON file.
pub fn write_summary_json(
    config: &ExperimentConfig,
    measurements: &[Measurement],
    path: &Path,
) -> Result<()> {
    let json = serde_json::json!({
        "config": {
            "budget": config.budget,
            "repeats": config.repeats,
            "seed": config.seed,
            "kcal_range": [config.kcal_range.0, config.kcal_range.1],
            "protein_range": [config.protein_range.0, config.protein_range.1],
        },
        "measurements": measurements,
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print measurements as a table.
pub fn print_measurements(measurements: &[Measurement]) {
    println!("\n=== Timing Results ===\n");
    println!(
        "{:<10} {:>6} {:>12} {:>12} {:>5} {:>7} {:>8}",
        "algorithm", "n", "best (s)", "mean (s)", "foods", "kcal", "protein"
    );

    for m in measurements {
        println!(
            "{:<10} {:>6} {:>12.6} {:>12.6} {:>5} {:>7} {:>8}",
            m.algorithm.to_string(),
            m.size,
            m.best_secs,
            m.mean_secs,
            m.selected,
            m.kcal,
            m.protein_g
        );
    }
    println!();
}
