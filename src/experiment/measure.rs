use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::error::{ProteinError, Result};
use crate::experiment::synthetic::synthetic_catalog;
use crate::models::Food;
use crate::optimizer::constants::{DEFAULT_BUDGET_KCAL, MAX_EXHAUSTIVE_ITEMS};
use crate::optimizer::Algorithm;

/// Timing of one algorithm on one catalog size.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub size: usize,
    pub budget: u32,
    pub repeats: usize,
    pub best_secs: f64,
    pub mean_secs: f64,
    pub selected: usize,
    pub kcal: u64,
    pub protein_g: u64,
}

/// Configuration for a timing experiment.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub greedy_sizes: Vec<usize>,
    pub exhaustive_sizes: Vec<usize>,
    pub budget: u32,
    pub repeats: usize,
    pub seed: u64,
    /// Calorie range for synthetic foods, and the filter range for database foods.
    pub kcal_range: (u32, u32),
    /// Protein range for synthetic foods.
    pub protein_range: (u32, u32),
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            greedy_sizes: vec![100, 1000, 6000],
            exhaustive_sizes: vec![5, 10, 15, 20, 25],
            budget: DEFAULT_BUDGET_KCAL,
            repeats: 3,
            seed: 123,
            kcal_range: (1, 2500),
            protein_range: (0, 60),
        }
    }
}

impl ExperimentConfig {
    /// Reject sizes the exhaustive search cannot handle before any timing starts.
    pub fn validate(&self) -> Result<()> {
        if let Some(&len) = self
            .exhaustive_sizes
            .iter()
            .find(|&&n| n > MAX_EXHAUSTIVE_ITEMS)
        {
            return Err(ProteinError::CatalogTooLarge {
                len,
                max: MAX_EXHAUSTIVE_ITEMS,
            });
        }
        if self.repeats == 0 {
            return Err(ProteinError::InvalidInput(
                "repeats must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Time `algorithm` on `catalog`, keeping the best and mean of `repeats` runs.
pub fn measure(
    algorithm: Algorithm,
    catalog: &[Food],
    budget: u32,
    repeats: usize,
) -> Result<Measurement> {
    let repeats = repeats.max(1);
    let mut elapsed = Vec::with_capacity(repeats);
    let mut last = None;

    for _ in 0..repeats {
        let timer = Instant::now();
        let selection = algorithm.run(catalog, budget)?;
        elapsed.push(timer.elapsed());
        last = Some(selection);
    }

    let selection = last.ok_or_else(|| ProteinError::InvalidInput("no runs".to_string()))?;
    let totals = selection.totals();
    let best = elapsed.iter().min().copied().unwrap_or_default();
    let total: Duration = elapsed.iter().sum();

    Ok(Measurement {
        algorithm,
        size: catalog.len(),
        budget,
        repeats,
        best_secs: best.as_secs_f64(),
        mean_secs: total.as_secs_f64() / repeats as f64,
        selected: selection.len(),
        kcal: totals.kcal,
        protein_g: totals.protein_g,
    })
}

/// Time both algorithms over the configured sizes.
///
/// Foods come from `source` when given (filtered to the calorie range, first
/// `n` kept), otherwise from a seeded synthetic catalog.
pub fn run_experiment(
    config: &ExperimentConfig,
    source: Option<&FoodCatalog>,
) -> Result<Vec<Measurement>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::new();

    let plan = config
        .greedy_sizes
        .iter()
        .map(|&n| (Algorithm::Greedy, n))
        .chain(
            config
                .exhaustive_sizes
                .iter()
                .map(|&n| (Algorithm::Exhaustive, n)),
        );

    for (algorithm, n) in plan {
        let catalog = match source {
            Some(all) => all.filter(config.kcal_range.0, config.kcal_range.1, n),
            None => synthetic_catalog(&mut rng, n, config.kcal_range, config.protein_range)?,
        };

        if catalog.len() < n {
            log::warn!(
                "{}: requested {} foods, only {} available",
                algorithm,
                n,
                catalog.len()
            );
        }

        let measurement = measure(algorithm, catalog.as_slice(), config.budget, config.repeats)?;
        log::info!(
            "{}_max_protein, n={}, elapsed time={:.6} seconds",
            algorithm,
            measurement.size,
            measurement.best_secs
        );
        results.push(measurement);
    }

    Ok(results)
}
