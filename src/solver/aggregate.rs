use std::sync::Arc;

use crate::models::{FoodItem, Totals};

/// Total weight and calories of a collection.
///
/// An empty collection yields `(0, 0)`.
pub fn sum_food_vector(foods: &[Arc<FoodItem>]) -> Totals {
    foods
        .iter()
        .fold(Totals::default(), |totals, food| totals + &**food)
}
