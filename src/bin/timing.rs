use std::path::PathBuf;

use clap::Parser;

use max_protein_rs::catalog::load_catalog;
use max_protein_rs::error::Result;
use max_protein_rs::experiment::{
    print_measurements, run_experiment, write_csv, write_summary_json, ExperimentConfig,
};
use max_protein_rs::optimizer::constants::DEFAULT_BUDGET_KCAL;

#[derive(Parser, Debug)]
#[command(name = "timing")]
#[command(about = "Time the greedy and exhaustive max-protein searches")]
struct Args {
    /// Catalog sizes for the greedy search (comma-separated)
    #[arg(long, default_value = "100,1000,6000")]
    greedy_sizes: String,

    /// Catalog sizes for the exhaustive search (comma-separated, each below 64)
    #[arg(long, default_value = "5,10,15,20,25")]
    exhaustive_sizes: String,

    /// Calorie budget
    #[arg(long, default_value_t = DEFAULT_BUDGET_KCAL)]
    budget: u32,

    /// Runs per measurement; the best and mean are reported
    #[arg(long, default_value = "3")]
    repeats: usize,

    /// Random seed for synthetic catalogs
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Nutrition database to draw foods from; synthetic foods if omitted
    #[arg(long)]
    database: Option<PathBuf>,

    /// Output CSV file for all measurements
    #[arg(long, default_value = "timing_results.csv")]
    csv: PathBuf,

    /// Output JSON file with settings and measurements
    #[arg(long, default_value = "timing_summary.json")]
    json: PathBuf,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_sizes(s: &str) -> Vec<usize> {
    s.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn main() {
    let args = Args::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = ExperimentConfig {
        greedy_sizes: parse_sizes(&args.greedy_sizes),
        exhaustive_sizes: parse_sizes(&args.exhaustive_sizes),
        budget: args.budget,
        repeats: args.repeats,
        seed: args.seed,
        ..ExperimentConfig::default()
    };

    let source = match &args.database {
        Some(path) => Some(load_catalog(path)?),
        None => None,
    };

    let measurements = run_experiment(&config, source.as_ref())?;
    print_measurements(&measurements);

    write_csv(&measurements, &args.csv)?;
    println!("Wrote all measurements to {:?}", args.csv);

    write_summary_json(&config, &measurements, &args.json)?;
    println!("Wrote summary to {:?}", args.json);

    Ok(())
}
