use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::error::{CalorieError, Result};
use crate::models::{FoodItem, FoodVector};
use crate::solver::constants::MAX_EXHAUSTIVE_ITEMS;

/// Bounds for randomly generated instances.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceRanges {
    pub items: (usize, usize),
    /// Whole-ounce weights, so both solvers see the same feasibility.
    pub weight: (u32, u32),
    pub calories: (f64, f64),
    /// Capacity as a fraction of the instance's total weight.
    pub capacity_fraction: (f64, f64),
}

impl Default for InstanceRanges {
    fn default() -> Self {
        Self {
            items: (1, 16),
            weight: (1, 40),
            calories: (1.0, 2500.0),
            capacity_fraction: (0.0, 1.0),
        }
    }
}

impl InstanceRanges {
    /// Check that every range is ordered and item counts stay below the exhaustive limit.
    pub fn validate(&self) -> Result<()> {
        if self.items.0 > self.items.1 || self.items.1 >= MAX_EXHAUSTIVE_ITEMS {
            return Err(CalorieError::InvalidInput(format!(
                "item range {}..={} must be ordered and below {}",
                self.items.0, self.items.1, MAX_EXHAUSTIVE_ITEMS
            )));
        }
        if self.weight.0 == 0 || self.weight.0 > self.weight.1 {
            return Err(CalorieError::InvalidInput(format!(
                "weight range {}..={} must be ordered and positive",
                self.weight.0, self.weight.1
            )));
        }
        if !(self.calories.0 <= self.calories.1) {
            return Err(CalorieError::InvalidInput(format!(
                "calorie range {}..={} must be ordered",
                self.calories.0, self.calories.1
            )));
        }
        let (lo, hi) = self.capacity_fraction;
        if !(0.0 <= lo && lo <= hi) {
            return Err(CalorieError::InvalidInput(format!(
                "capacity fraction {}..={} must be ordered and non-negative",
                lo, hi
            )));
        }
        Ok(())
    }
}

/// One generated problem.
#[derive(Debug, Clone)]
pub struct Instance {
    pub foods: FoodVector,
    /// Whole number of ounces.
    pub capacity: f64,
}

impl Instance {
    /// Generate a random instance within `ranges`.
    pub fn random(rng: &mut impl Rng, ranges: &InstanceRanges, index: usize) -> Result<Self> {
        let n = rng.gen_range(ranges.items.0..=ranges.items.1);

        let mut foods = Vec::with_capacity(n);
        for j in 0..n {
            let weight = rng.gen_range(ranges.weight.0..=ranges.weight.1) as f64;
            let calories = rng.gen_range(ranges.calories.0..=ranges.calories.1);
            // Two decimals, like a real nutrition table.
            let calories = (calories * 100.0).round() / 100.0;
            foods.push(Arc::new(FoodItem::new(
                format!("food-{}-{}", index, j),
                weight,
                calories,
            )?));
        }

        let total_weight: f64 = foods.iter().map(|f| f.weight()).sum();
        let fraction = rng.gen_range(ranges.capacity_fraction.0..=ranges.capacity_fraction.1);
        let capacity = (total_weight * fraction).floor();

        Ok(Self { foods, capacity })
    }
}
