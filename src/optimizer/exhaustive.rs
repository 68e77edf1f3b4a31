use crate::error::{ProteinError, Result};
use crate::models::{Food, Selection};
use crate::optimizer::aggregate;
use crate::optimizer::constants::MAX_EXHAUSTIVE_ITEMS;

/// Find the subset with the most protein within a calorie budget.
///
/// Every subset is tried as a bitmask in ascending order, where bit `j` set
/// means `catalog[j]` is included. A candidate replaces the best one only if
/// it fits the budget and has strictly more protein, so the lowest mask wins
/// ties. The empty subset always fits, so the result is never worse than
/// empty.
///
/// Runs in O(2^n * n). Catalogs of more than [`MAX_EXHAUSTIVE_ITEMS`] foods are
/// rejected with [`ProteinError::CatalogTooLarge`] before any work is done.
pub fn select_exhaustive(catalog: &[Food], budget: u32) -> Result<Selection<'_>> {
    let n = catalog.len();
    if n > MAX_EXHAUSTIVE_ITEMS {
        return Err(ProteinError::CatalogTooLarge {
            len: n,
            max: MAX_EXHAUSTIVE_ITEMS,
        });
    }

    let budget = u64::from(budget);
    let subsets: u64 = 1 << n;
    let mut best: Option<(Vec<usize>, u64)> = None;

    for mask in 0..subsets {
        let candidate: Vec<usize> = (0..n).filter(|&j| (mask >> j) & 1 == 1).collect();
        let totals = aggregate(candidate.iter().map(|&j| &catalog[j]));

        if totals.kcal > budget {
            continue;
        }

        let improves = match &best {
            None => true,
            Some((_, best_protein)) => totals.protein_g > *best_protein,
        };
        if improves {
            best = Some((candidate, totals.protein_g));
        }
    }

    let chosen = best.map(|(indices, _)| indices).unwrap_or_default();
    log::debug!(
        "exhaustive: searched {} subsets of {} foods, chose {}",
        subsets,
        n,
        chosen.len()
    );

    Ok(Selection::new(catalog, chosen))
}
