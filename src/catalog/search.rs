use strsim::jaro_winkler;

use crate::catalog::FoodCatalog;
use crate::models::Food;

/// Minimum Jaro-Winkler similarity for a fuzzy search hit.
pub const SEARCH_THRESHOLD: f64 = 0.7;

/// Default number of search hits shown.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// A food matched by [`search`].
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    /// Position in the catalog.
    pub index: usize,
    pub food: &'a Food,
    /// 1.0 for a substring match, Jaro-Winkler similarity otherwise.
    pub score: f64,
}

/// Find foods whose description resembles `query` (case-insensitive).
///
/// Best matches first; equal scores keep catalog order.
pub fn search<'a>(catalog: &'a FoodCatalog, query: &str, limit: usize) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = catalog
        .iter()
        .enumerate()
        .filter_map(|(index, food)| {
            let description = food.description().to_lowercase();
            let score = if description.contains(&query) {
                1.0
            } else {
                jaro_winkler(&description, &query)
            };
            (score > SEARCH_THRESHOLD).then_some(SearchHit { index, food, score })
        })
        .collect();

    // Stable sort keeps catalog order among equal scores
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    hits.truncate(limit);

    log::debug!("search {:?}: {} hits", query, hits.len());
    hits
}
