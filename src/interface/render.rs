use std::time::Duration;

use crate::catalog::SearchHit;
use crate::models::{Food, Selection};
use crate::optimizer::Algorithm;

/// One optimizer run, for side-by-side display.
#[derive(Debug)]
pub struct AlgorithmRun<'a> {
    pub algorithm: Algorithm,
    pub selection: Selection<'a>,
    pub elapsed: Duration,
}

/// Single-line description of a food.
pub fn describe_food(food: &Food) -> String {
    format!(
        "{} (100 g where each {} is {} g) kcal={} protein={} g",
        food.description(),
        food.amount(),
        food.amount_g(),
        food.kcal(),
        food.protein_g()
    )
}

/// Print each selected food followed by the selection totals.
pub fn display_selection(title: &str, selection: &Selection<'_>) {
    println!();
    println!("=== {} ({} foods) ===", title, selection.len());
    println!();

    for food in selection.foods() {
        println!("{}", describe_food(food));
    }

    let totals = selection.totals();
    println!(
        "total kcal={} total_protein={} g",
        totals.kcal, totals.protein_g
    );
    println!();
}

/// Print several runs over the same catalog and compare their protein.
pub fn display_comparison(runs: &[AlgorithmRun<'_>], budget: u32) {
    for run in runs {
        display_selection(&run.algorithm.to_string(), &run.selection);
    }

    println!("--- Summary (budget {} kcal) ---", budget);
    for run in runs {
        let totals = run.selection.totals();
        println!(
            "{:<10} {:>3} foods {:>6} kcal {:>5} g protein  {:.6} s",
            run.algorithm.to_string(),
            run.selection.len(),
            totals.kcal,
            totals.protein_g,
            run.elapsed.as_secs_f64()
        );
    }

    let protein_of = |algorithm: Algorithm| {
        runs.iter()
            .find(|r| r.algorithm == algorithm)
            .map(|r| r.selection.totals().protein_g)
    };

    if let (Some(greedy), Some(exhaustive)) = (
        protein_of(Algorithm::Greedy),
        protein_of(Algorithm::Exhaustive),
    ) {
        match protein_ratio(greedy, exhaustive) {
            Some(ratio) => println!("Greedy reaches {:.1}% of optimal protein", ratio * 100.0),
            None => println!("No protein is reachable within the budget"),
        }
    }
    println!();
}

/// Greedy protein as a fraction of the optimum; `None` when the optimum is zero.
pub fn protein_ratio(greedy: u64, optimal: u64) -> Option<f64> {
    if optimal == 0 {
        None
    } else {
        Some(greedy as f64 / optimal as f64)
    }
}

/// Print fuzzy search results.
pub fn display_search_hits(query: &str, hits: &[SearchHit<'_>]) {
    if hits.is_empty() {
        println!("No foods match '{}'", query);
        return;
    }

    println!();
    println!("=== Matches for '{}' ({} foods) ===", query, hits.len());
    println!();

    for hit in hits {
        println!(
            "  #{:<5} {:.2}  {}",
            hit.index,
            hit.score,
            describe_food(hit.food)
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_describe_food() {
        let food = Food::new("EGG,WHL,RAW", "1 large", 50, 143, 13).unwrap();
        assert_eq!(
            describe_food(&food),
            "EGG,WHL,RAW (100 g where each 1 large is 50 g) kcal=143 protein=13 g"
        );
    }

    #[test]
    fn test_protein_ratio() {
        assert_float_absolute_eq!(protein_ratio(10, 18).unwrap(), 0.5556, 0.001);
        assert_float_absolute_eq!(protein_ratio(18, 18).unwrap(), 1.0, 1e-9);
        assert!(protein_ratio(0, 0).is_none());
    }
}
