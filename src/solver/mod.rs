pub mod aggregate;
pub mod constants;
pub mod dynamic;
pub mod exhaustive;
pub mod filter;

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{CalorieError, Result};
use crate::models::{FoodItem, FoodVector, SolutionReport};

pub use aggregate::sum_food_vector;
pub use constants::*;
pub use dynamic::{dynamic_max_calories, table_capacity, table_cells, weight_units};
pub use exhaustive::exhaustive_max_calories;
pub use filter::{filter_food_vector, matches_calorie_range};

/// Strategy used to pick the optimal set of foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Try every subset (fewer than 64 items).
    Exhaustive,
    /// Tabulate over integer capacity.
    Dynamic,
}

impl Algorithm {
    /// Solve for a real-valued capacity.
    ///
    /// The dynamic strategy works on whole capacity units and uses the floor
    /// of `capacity`, which never admits a heavier solution. It fails with
    /// [`CalorieError::TableTooLarge`] when the table cannot be addressed.
    pub fn solve(&self, foods: &[Arc<FoodItem>], capacity: f64) -> Result<FoodVector> {
        match self {
            Algorithm::Exhaustive => exhaustive_max_calories(foods, capacity),
            Algorithm::Dynamic => {
                let units = table_capacity(foods, integer_capacity(capacity)?);
                if table_cells(foods.len(), units).is_none() {
                    return Err(CalorieError::TableTooLarge {
                        cells: usize::MAX,
                        max: MAX_TABLE_CELLS,
                    });
                }
                Ok(dynamic_max_calories(foods, units))
            }
        }
    }

    /// Solve and time the run.
    pub fn run(&self, foods: &[Arc<FoodItem>], capacity: f64) -> Result<SolutionReport> {
        let start = Instant::now();
        let solution = self.solve(foods, capacity)?;
        let elapsed = start.elapsed();

        let totals = sum_food_vector(&solution);
        Ok(SolutionReport::new(
            *self,
            capacity,
            foods.len(),
            &solution,
            totals,
            elapsed,
        ))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Exhaustive => write!(f, "exhaustive"),
            Algorithm::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Whole capacity units available under a real capacity (rounded down).
///
/// Capacities that do not fit in `usize` are rejected rather than clamped.
pub fn integer_capacity(capacity: f64) -> Result<usize> {
    if !capacity.is_finite() || capacity < 0.0 || capacity >= usize::MAX as f64 {
        return Err(CalorieError::InvalidCapacity(capacity));
    }
    Ok(capacity.floor() as usize)
}

/// Reject dynamic programming runs whose table would exceed [`MAX_TABLE_CELLS`].
pub fn check_table_limit(foods: &[Arc<FoodItem>], capacity: f64) -> Result<()> {
    let units = table_capacity(foods, integer_capacity(capacity)?);
    match table_cells(foods.len(), units) {
        Some(cells) if cells <= MAX_TABLE_CELLS => Ok(()),
        cells => Err(CalorieError::TableTooLarge {
            cells: cells.unwrap_or(usize::MAX),
            max: MAX_TABLE_CELLS,
        }),
    }
}

/// Whether an exhaustive search over `items` foods is slow enough to confirm first.
pub fn exhaustive_needs_confirmation(items: usize) -> bool {
    items > EXHAUSTIVE_CONFIRM_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trivial_foods() -> FoodVector {
        vec![
            FoodItem::shared("test whole corn", 10.0, 20.0).unwrap(),
            FoodItem::shared("test pasta", 4.0, 5.0).unwrap(),
        ]
    }

    #[test]
    fn test_integer_capacity() {
        assert_eq!(integer_capacity(9.99).unwrap(), 9);
        assert_eq!(integer_capacity(0.0).unwrap(), 0);
        assert!(integer_capacity(-0.5).is_err());
        assert!(integer_capacity(f64::INFINITY).is_err());
        assert!(matches!(
            integer_capacity(1e30),
            Err(CalorieError::InvalidCapacity(_))
        ));
        assert!(integer_capacity(usize::MAX as f64).is_err());
    }

    #[test]
    fn test_dynamic_rejects_unrepresentable_capacity() {
        let corn = vec![FoodItem::shared("test whole corn", 10.0, 20.0).unwrap()];
        assert!(matches!(
            Algorithm::Dynamic.solve(&corn, 1e30),
            Err(CalorieError::InvalidCapacity(_))
        ));
        assert!(Algorithm::Dynamic.run(&corn, 1e30).is_err());
    }

    #[test]
    fn test_dynamic_large_capacity_takes_everything() {
        let foods = trivial_foods();
        let solution = Algorithm::Dynamic.solve(&foods, 1e15).unwrap();
        assert_eq!(solution, foods);
    }

    #[test]
    fn test_dynamic_rejects_unaddressable_table() {
        let giant = FoodItem::shared("giant", 1e25, 1.0).unwrap();
        let foods = vec![giant.clone(), giant];
        assert!(matches!(
            Algorithm::Dynamic.solve(&foods, 1.8e19),
            Err(CalorieError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn test_strategies_agree_on_trivial_foods() {
        let foods = trivial_foods();
        for capacity in [3.0, 9.0, 10.0, 14.0] {
            let a = Algorithm::Exhaustive.solve(&foods, capacity).unwrap();
            let b = Algorithm::Dynamic.solve(&foods, capacity).unwrap();
            assert_eq!(a, b, "capacity {}", capacity);
        }
    }

    #[test]
    fn test_dynamic_floors_capacity() {
        let foods = trivial_foods();
        let solution = Algorithm::Dynamic.solve(&foods, 13.9).unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(solution[0].description(), "test whole corn");
    }

    #[test]
    fn test_check_table_limit() {
        let foods = trivial_foods();
        assert!(check_table_limit(&foods, 5000.0).is_ok());
        assert!(check_table_limit(&foods, 1e15).is_ok());

        let heavy = FoodItem::shared("heavy", 1e6, 1.0).unwrap();
        let heavy_foods: FoodVector = (0..1000).map(|_| heavy.clone()).collect();
        assert!(matches!(
            check_table_limit(&heavy_foods, 1e9),
            Err(CalorieError::TableTooLarge { .. })
        ));
        assert!(matches!(
            check_table_limit(&foods, -1.0),
            Err(CalorieError::InvalidCapacity(_))
        ));
        assert!(matches!(
            check_table_limit(&foods, 1e30),
            Err(CalorieError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_exhaustive_needs_confirmation() {
        assert!(!exhaustive_needs_confirmation(EXHAUSTIVE_CONFIRM_ITEMS));
        assert!(exhaustive_needs_confirmation(EXHAUSTIVE_CONFIRM_ITEMS + 1));
        assert!(exhaustive_needs_confirmation(40));
    }

    #[test]
    fn test_run_reports_totals() {
        let report = Algorithm::Exhaustive.run(&trivial_foods(), 14.0).unwrap();
        assert_eq!(report.algorithm, Algorithm::Exhaustive);
        assert_eq!(report.candidates, 2);
        assert_eq!(report.items.len(), 2);
        assert!((report.totals.calories - 25.0).abs() < 0.001);
        assert!((report.totals.weight - 14.0).abs() < 0.001);
    }

    #[test]
    fn test_display() {
        assert_eq!(Algorithm::Exhaustive.to_string(), "exhaustive");
        assert_eq!(Algorithm::Dynamic.to_string(), "dynamic");
    }
}
