use crate::models::Food;
use crate::optimizer::aggregate;

/// Total calories and protein of a group of foods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub kcal: u64,
    pub protein_g: u64,
}

/// Foods chosen by an optimizer, held as indices into the catalog they came from.
///
/// The catalog keeps ownership of every food; a selection only borrows it.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    catalog: &'a [Food],
    indices: Vec<usize>,
}

impl<'a> Selection<'a> {
    pub(crate) fn new(catalog: &'a [Food], indices: Vec<usize>) -> Self {
        debug_assert!(indices.iter().all(|&i| i < catalog.len()));
        Self { catalog, indices }
    }

    /// Empty selection over `catalog`.
    pub fn empty(catalog: &'a [Food]) -> Self {
        Self::new(catalog, Vec::new())
    }

    /// Catalog positions of the chosen foods, in selection order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Chosen foods, in selection order.
    pub fn foods(&self) -> impl Iterator<Item = &'a Food> + '_ {
        let catalog = self.catalog;
        self.indices.iter().map(move |&i| &catalog[i])
    }

    pub fn totals(&self) -> Totals {
        aggregate(self.foods())
    }

    /// Total calories fit within `budget`.
    pub fn is_feasible(&self, budget: u32) -> bool {
        self.totals().kcal <= u64::from(budget)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
