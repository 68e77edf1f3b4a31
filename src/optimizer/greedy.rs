use crate::models::{Food, Selection};

/// Pick foods greedily by protein within a calorie budget.
///
/// Repeatedly takes the remaining food with the most protein (first one in
/// catalog order on ties) and removes it from consideration. It joins the
/// selection if it still fits in the budget and is dropped for good otherwise.
/// The result is always feasible but not necessarily optimal.
pub fn select_greedy(catalog: &[Food], budget: u32) -> Selection<'_> {
    let budget = u64::from(budget);
    let mut todo: Vec<usize> = (0..catalog.len()).collect();
    let mut chosen = Vec::new();
    let mut used_kcal: u64 = 0;

    while !todo.is_empty() {
        let mut best_pos = 0;
        for (pos, &idx) in todo.iter().enumerate().skip(1) {
            if catalog[idx].protein_g() > catalog[todo[best_pos]].protein_g() {
                best_pos = pos;
            }
        }

        // Vec::remove keeps the remaining foods in catalog order for tie-breaks
        let idx = todo.remove(best_pos);
        let food = &catalog[idx];

        if used_kcal + u64::from(food.kcal()) <= budget {
            used_kcal += u64::from(food.kcal());
            chosen.push(idx);
        } else {
            log::trace!("greedy: skip {}", food.debug_string());
        }
    }

    log::debug!(
        "greedy: chose {} of {} foods, {} / {} kcal",
        chosen.len(),
        catalog.len(),
        used_kcal,
        budget
    );

    Selection::new(catalog, chosen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, kcal: u32, protein: u32) -> Food {
        Food::new(name, "1 serving", 100, kcal, protein).unwrap()
    }

    #[test]
    fn test_empty_catalog() {
        let selection = select_greedy(&[], 2000);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_picks_by_protein_and_skips_overflow() {
        let catalog = vec![
            food("A", 500, 10),
            food("B", 900, 40),
            food("C", 300, 30),
            food("D", 400, 5),
        ];
        let selection = select_greedy(&catalog, 1300);
        // B (40) fits, C (30) fits, A (10) would exceed, D (5) does not fit either
        assert_eq!(selection.indices(), &[1, 2]);
        assert_eq!(selection.totals().kcal, 1200);
    }

    #[test]
    fn test_discarded_food_is_not_revisited() {
        let catalog = vec![food("Heavy", 150, 50), food("Light", 50, 10)];
        let selection = select_greedy(&catalog, 100);
        assert_eq!(selection.indices(), &[1]);
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let catalog = vec![food("First", 100, 20), food("Second", 100, 20)];
        let selection = select_greedy(&catalog, 100);
        assert_eq!(selection.indices(), &[0]);
    }

    #[test]
    fn test_zero_protein_foods_still_considered() {
        let catalog = vec![food("Sugar", 50, 0), food("Oil", 120, 0)];
        let selection = select_greedy(&catalog, 100);
        assert_eq!(selection.indices(), &[0]);
    }

    #[test]
    fn test_exact_budget_fits() {
        let catalog = vec![food("Exact", 2000, 80)];
        assert_eq!(select_greedy(&catalog, 2000).len(), 1);
        assert!(select_greedy(&catalog, 1999).is_empty());
    }
}
