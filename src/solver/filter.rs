use std::sync::Arc;

use tracing::debug;

use crate::error::{CalorieError, Result};
use crate::models::{FoodItem, FoodVector};

/// Whether a food belongs in a filtered catalog.
///
/// Calories must be positive and within `[min_calories, max_calories]`.
#[inline]
pub fn matches_calorie_range(food: &FoodItem, min_calories: f64, max_calories: f64) -> bool {
    let calories = food.calories();
    calories > 0.0 && calories >= min_calories && calories <= max_calories
}

/// Select the first `limit` foods, in source order, whose calories are
/// positive and within `[min_calories, max_calories]`.
///
/// Used to drop foods that cannot help the optimization and to keep inputs
/// to the exhaustive search small. A zero `limit` is a usage error.
pub fn filter_food_vector(
    source: &[Arc<FoodItem>],
    min_calories: f64,
    max_calories: f64,
    limit: usize,
) -> Result<FoodVector> {
    if limit == 0 {
        return Err(CalorieError::InvalidLimit(limit));
    }

    let filtered: FoodVector = source
        .iter()
        .filter(|food| matches_calorie_range(food, min_calories, max_calories))
        .take(limit)
        .cloned()
        .collect();

    debug!(
        source = source.len(),
        kept = filtered.len(),
        min_calories,
        max_calories,
        limit,
        "filtered food vector"
    );

    Ok(filtered)
}
