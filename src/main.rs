use std::path::Path;
use std::time::Instant;

use clap::Parser;

use max_protein_rs::catalog::{load_catalog, save_catalog_json, search, FoodCatalog};
use max_protein_rs::cli::{Cli, Command, FilterArgs};
use max_protein_rs::error::Result;
use max_protein_rs::interface::{
    confirm_exhaustive, display_comparison, display_search_hits, display_selection, AlgorithmRun,
};
use max_protein_rs::optimizer::{select_exhaustive, select_greedy, Algorithm};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    let database = cli.database;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Greedy { filter, budget } => cmd_greedy(&database, &filter, budget),
        Command::Exhaustive {
            filter,
            budget,
            yes,
        } => cmd_exhaustive(&database, &filter, budget, yes),
        Command::Compare { filter, budget } => cmd_compare(&database, &filter, budget),
        Command::Search { query, limit } => cmd_search(&database, &query, limit),
        Command::Export { filter, output } => cmd_export(&database, &filter, &output),
    }
}

/// Load the database and apply the calorie/size filter.
fn load_filtered(database: &str, filter: &FilterArgs) -> Result<FoodCatalog> {
    let all_foods = load_catalog(Path::new(database))?;
    let catalog = all_foods.filter(filter.min_kcal, filter.max_kcal, filter.size);
    log::info!(
        "Using {} of {} foods ({} < kcal <= {})",
        catalog.len(),
        all_foods.len(),
        filter.min_kcal,
        filter.max_kcal
    );
    Ok(catalog)
}

/// Choose foods with the greedy heuristic.
fn cmd_greedy(database: &str, filter: &FilterArgs, budget: u32) -> Result<()> {
    let catalog = load_filtered(database, filter)?;

    let timer = Instant::now();
    let selection = select_greedy(catalog.as_slice(), budget);
    log::info!(
        "greedy: n={} elapsed={:.6} s",
        catalog.len(),
        timer.elapsed().as_secs_f64()
    );

    display_selection("Greedy selection", &selection);
    Ok(())
}

/// Choose the optimal foods by exhaustive search.
fn cmd_exhaustive(database: &str, filter: &FilterArgs, budget: u32, yes: bool) -> Result<()> {
    let catalog = load_filtered(database, filter)?;

    if !confirm_exhaustive(catalog.len(), yes)? {
        println!("Exhaustive search cancelled.");
        return Ok(());
    }

    let timer = Instant::now();
    let selection = select_exhaustive(catalog.as_slice(), budget)?;
    log::info!(
        "exhaustive: n={} elapsed={:.6} s",
        catalog.len(),
        timer.elapsed().as_secs_f64()
    );

    display_selection("Exhaustive selection", &selection);
    Ok(())
}

/// Run both algorithms on the same catalog.
fn cmd_compare(database: &str, filter: &FilterArgs, budget: u32) -> Result<()> {
    let catalog = load_filtered(database, filter)?;

    let mut runs = Vec::new();
    for algorithm in [Algorithm::Greedy, Algorithm::Exhaustive] {
        if !algorithm.supports(catalog.len()) {
            log::warn!(
                "Skipping {} search: {} foods is too many (use --size to limit)",
                algorithm,
                catalog.len()
            );
            continue;
        }

        let timer = Instant::now();
        let selection = algorithm.run(catalog.as_slice(), budget)?;
        runs.push(AlgorithmRun {
            algorithm,
            selection,
            elapsed: timer.elapsed(),
        });
    }

    display_comparison(&runs, budget);
    Ok(())
}

/// Look up foods by description.
fn cmd_search(database: &str, query: &str, limit: usize) -> Result<()> {
    let catalog = load_catalog(Path::new(database))?;
    let hits = search(&catalog, query, limit);
    display_search_hits(query, &hits);
    Ok(())
}

/// Write the filtered catalog to JSON.
fn cmd_export(database: &str, filter: &FilterArgs, output: &str) -> Result<()> {
    let catalog = load_filtered(database, filter)?;
    save_catalog_json(output, &catalog)?;
    println!("Wrote {} foods to {}", catalog.len(), output);
    Ok(())
}
