use std::sync::Arc;

use tracing::debug;

use crate::error::{CalorieError, Result};
use crate::models::{FoodItem, FoodVector, Totals};
use crate::solver::constants::MAX_EXHAUSTIVE_ITEMS;

/// Iterate over the members of `foods` selected by the set bits of `mask`.
fn subset(foods: &[Arc<FoodItem>], mask: u64) -> impl Iterator<Item = &Arc<FoodItem>> {
    foods
        .iter()
        .enumerate()
        .filter(move |(j, _)| (mask >> j) & 1 == 1)
        .map(|(_, food)| food)
}

fn subset_totals(foods: &[Arc<FoodItem>], mask: u64) -> Totals {
    subset(foods, mask).fold(Totals::default(), |totals, food| totals + &**food)
}

/// Compute the optimal set of foods by exhaustive search.
///
/// Every subset of `foods` is encoded as a bitmask in `0..2^n`. Among the
/// subsets whose weight fits within `capacity`, the first one found with the
/// greatest calories wins; a later subset must have strictly more calories
/// to replace it. The empty subset is the starting point, so subsets with no
/// positive calorie total are never chosen.
///
/// `foods` must hold fewer than [`MAX_EXHAUSTIVE_ITEMS`] items and
/// `capacity` must be non-negative; anything else is a usage error.
pub fn exhaustive_max_calories(foods: &[Arc<FoodItem>], capacity: f64) -> Result<FoodVector> {
    let n = foods.len();
    if n >= MAX_EXHAUSTIVE_ITEMS {
        return Err(CalorieError::TooManyItems {
            count: n,
            max: MAX_EXHAUSTIVE_ITEMS,
        });
    }
    if capacity.is_nan() || capacity < 0.0 {
        return Err(CalorieError::InvalidCapacity(capacity));
    }

    let subsets = 1u64 << n;
    let mut best_mask = 0;
    let mut best = Totals::default();

    for mask in 1..subsets {
        let candidate = subset_totals(foods, mask);
        if candidate.fits(capacity) && candidate.calories > best.calories {
            best_mask = mask;
            best = candidate;
        }
    }

    debug!(
        items = n,
        subsets,
        capacity,
        best_calories = best.calories,
        best_weight = best.weight,
        "exhaustive search finished"
    );

    Ok(subset(foods, best_mask).cloned().collect())
}
