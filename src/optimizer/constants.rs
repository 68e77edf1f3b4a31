/// Largest catalog the exhaustive search accepts (masks are 64-bit).
pub const MAX_EXHAUSTIVE_ITEMS: usize = 63;

/// Default daily calorie budget.
pub const DEFAULT_BUDGET_KCAL: u32 = 2000;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog filtering defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Exclusive lower calorie bound; 0 drops zero-calorie foods.
pub const DEFAULT_MIN_KCAL: u32 = 0;

/// Inclusive upper calorie bound.
pub const DEFAULT_MAX_KCAL: u32 = 2500;

/// Default number of foods kept after filtering.
pub const DEFAULT_CATALOG_SIZE: usize = 25;

/// Catalog size above which the CLI asks before running exhaustive search.
pub const EXHAUSTIVE_CONFIRM_THRESHOLD: usize = 30;
