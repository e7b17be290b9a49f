use std::sync::Arc;

use tracing::debug;

use crate::models::{FoodItem, FoodVector};

/// Integer capacity units an item occupies in the table.
///
/// Fractional weights round up, so a subset that fits the table also fits
/// the real capacity. Integral weights are exact.
#[inline]
pub fn weight_units(food: &FoodItem) -> usize {
    food.weight().ceil() as usize
}

/// Number of cells in the table for `items` foods and `capacity`, or `None`
/// if it does not fit in `usize`.
pub fn table_cells(items: usize, capacity: usize) -> Option<usize> {
    items.checked_add(1)?.checked_mul(capacity.checked_add(1)?)
}

/// Capacity the table actually needs.
///
/// Units beyond the combined cost of every food never change the answer, so
/// a larger `capacity` is cut down to that total.
pub fn table_capacity(foods: &[Arc<FoodItem>], capacity: usize) -> usize {
    let total = foods
        .iter()
        .fold(0usize, |total, food| total.saturating_add(weight_units(food)));
    capacity.min(total)
}

/// Compute the optimal set of foods with 0/1 knapsack tabulation.
///
/// `K[i][w]` holds the best calories reachable with the first `i` foods
/// within `w` capacity units. The chosen foods are recovered by walking the
/// table back from `K[n][capacity]` and are returned in catalog order.
///
/// The table has `(n + 1) * (c + 1)` cells where `c` is
/// [`table_capacity`]`(foods, capacity)`, so any capacity past the total
/// weight of `foods` costs nothing extra.
///
/// # Panics
///
/// Panics if [`table_cells`] reports that table as unrepresentable, which
/// takes foods whose combined weight is near `usize::MAX` ounces.
/// [`Algorithm::solve`](crate::solver::Algorithm::solve) checks this and
/// returns an error instead.
pub fn dynamic_max_calories(foods: &[Arc<FoodItem>], capacity: usize) -> FoodVector {
    let n = foods.len();
    let capacity = table_capacity(foods, capacity);
    let width = capacity + 1;
    let costs: Vec<usize> = foods.iter().map(|f| weight_units(f)).collect();

    // Row 0 and column 0 stay at zero.
    let mut table = vec![0.0_f64; (n + 1) * width];

    for i in 1..=n {
        let (above, rest) = table.split_at_mut(i * width);
        let prev = &above[(i - 1) * width..];
        let row = &mut rest[..width];
        let cost = costs[i - 1];
        let calories = foods[i - 1].calories();

        for w in 0..width {
            row[w] = if cost <= w {
                prev[w].max(calories + prev[w - cost])
            } else {
                prev[w]
            };
        }
    }

    let mut chosen = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        // An unchanged value means food i-1 was not needed for this cell.
        if table[i * width + w] != table[(i - 1) * width + w] {
            chosen.push(Arc::clone(&foods[i - 1]));
            w -= costs[i - 1];
        }
    }
    chosen.reverse();

    debug!(
        items = n,
        capacity,
        cells = table.len(),
        best_calories = table[n * width + capacity],
        chosen = chosen.len(),
        "dynamic programming finished"
    );

    chosen
}
