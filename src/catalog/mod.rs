mod persistence;
mod search;
mod usda;

use std::path::Path;

use crate::error::Result;
use crate::models::Food;

pub use persistence::{load_catalog_json, save_catalog_json};
pub use search::{search, SearchHit, DEFAULT_SEARCH_LIMIT, SEARCH_THRESHOLD};
pub use usda::{load_usda_abbrev, parse_usda_abbrev};

/// Ordered, read-only collection of foods.
///
/// Order is the order of the source data. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodCatalog {
    foods: Vec<Food>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<Food>) -> Self {
        Self { foods }
    }

    pub fn as_slice(&self) -> &[Food] {
        &self.foods
    }

    pub fn get(&self, index: usize) -> Option<&Food> {
        self.foods.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Food> {
        self.foods.iter()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Keep the first `max_size` foods with `min_kcal < kcal <= max_kcal`.
    ///
    /// Used to drop zero-calorie foods and to bound the input size of the
    /// exhaustive search.
    pub fn filter(&self, min_kcal: u32, max_kcal: u32, max_size: usize) -> FoodCatalog {
        let foods: Vec<Food> = self
            .foods
            .iter()
            .filter(|f| f.kcal() > min_kcal && f.kcal() <= max_kcal)
            .take(max_size)
            .cloned()
            .collect();

        log::debug!(
            "filter ({}, {}] kcal, max {}: kept {} of {} foods",
            min_kcal,
            max_kcal,
            max_size,
            foods.len(),
            self.foods.len()
        );

        FoodCatalog::new(foods)
    }
}

impl From<Vec<Food>> for FoodCatalog {
    fn from(foods: Vec<Food>) -> Self {
        Self::new(foods)
    }
}

impl<'a> IntoIterator for &'a FoodCatalog {
    type Item = &'a Food;
    type IntoIter = std::slice::Iter<'a, Food>;

    fn into_iter(self) -> Self::IntoIter {
        self.foods.iter()
    }
}

/// Load a catalog, choosing the format from the file extension.
///
/// `.json` files are read as saved catalogs, anything else as USDA ABBREV text.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        load_catalog_json(path)
    } else {
        load_usda_abbrev(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            Food::new("Water", "1 cup", 237, 0, 0).unwrap(),
            Food::new("Egg", "1 large", 50, 72, 6).unwrap(),
            Food::new("Butter", "1 cup", 227, 1628, 2).unwrap(),
            Food::new("Lard", "1 cup", 205, 2600, 0).unwrap(),
            Food::new("Egg", "1 large", 50, 72, 6).unwrap(),
            Food::new("Cheddar", "1 oz", 28, 114, 7).unwrap(),
        ])
    }

    #[test]
    fn test_filter_calorie_range() {
        let filtered = sample_catalog().filter(0, 2500, 100);
        let names: Vec<&str> = filtered.iter().map(|f| f.description()).collect();
        // Zero-calorie and over-range foods drop out, duplicates stay
        assert_eq!(names, vec!["Egg", "Butter", "Egg", "Cheddar"]);
    }

    #[test]
    fn test_filter_lower_bound_exclusive() {
        let filtered = sample_catalog().filter(72, 2600, 100);
        let names: Vec<&str> = filtered.iter().map(|f| f.description()).collect();
        assert_eq!(names, vec!["Butter", "Lard", "Cheddar"]);
    }

    #[test]
    fn test_filter_caps_size_in_order() {
        let filtered = sample_catalog().filter(0, 2500, 2);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get(0).unwrap().description(), "Egg");
        assert_eq!(filtered.get(1).unwrap().description(), "Butter");
    }

    #[test]
    fn test_filter_leaves_source_untouched() {
        let catalog = sample_catalog();
        let _ = catalog.filter(100, 200, 1);
        assert_eq!(catalog, sample_catalog());
    }
}
