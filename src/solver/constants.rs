/// Exhaustive search accepts strictly fewer items than this (bit width of the subset mask).
pub const MAX_EXHAUSTIVE_ITEMS: usize = u64::BITS as usize;

/// Above this many items the CLI asks before running an exhaustive search.
pub const EXHAUSTIVE_CONFIRM_ITEMS: usize = 25;

/// Largest dynamic programming table the CLI will allocate (cells of f64).
pub const MAX_TABLE_CELLS: usize = 25_000_000;

/// Two calorie totals closer than this are considered equal when comparing solvers.
pub const CALORIE_TOLERANCE: f64 = 1e-6;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog format
// ─────────────────────────────────────────────────────────────────────────────

/// Default path of the food database.
pub const DEFAULT_DATABASE_PATH: &str = "food.csv";

/// Field separator used by the food database.
pub const FIELD_DELIMITER: u8 = b'^';

/// Fields per row: description, weight in ounces, calories.
pub const FIELD_COUNT: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog search
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a fuzzy description match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Default number of search results shown.
pub const DEFAULT_SEARCH_RESULTS: usize = 5;
