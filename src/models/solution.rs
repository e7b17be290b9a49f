use std::ops::Add;
use std::time::Duration;

use serde::Serialize;

use crate::models::{FoodItem, FoodVector};
use crate::solver::Algorithm;

/// Total weight and calories of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub weight: f64,
    pub calories: f64,
}

impl Totals {
    pub fn new(weight: f64, calories: f64) -> Self {
        Self { weight, calories }
    }

    /// Whether these totals fit under `capacity`.
    pub fn fits(&self, capacity: f64) -> bool {
        self.weight <= capacity
    }
}

impl Add<&FoodItem> for Totals {
    type Output = Totals;

    fn add(self, food: &FoodItem) -> Totals {
        Totals {
            weight: self.weight + food.weight(),
            calories: self.calories + food.calories(),
        }
    }
}

/// Outcome of one solver run, ready for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport {
    pub algorithm: Algorithm,
    pub capacity: f64,
    /// Number of items the solver chose from.
    pub candidates: usize,
    pub items: Vec<FoodItem>,
    pub totals: Totals,
    pub elapsed_ms: f64,
}

impl SolutionReport {
    pub fn new(
        algorithm: Algorithm,
        capacity: f64,
        candidates: usize,
        solution: &FoodVector,
        totals: Totals,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            capacity,
            candidates,
            items: solution.iter().map(|f| FoodItem::clone(f)).collect(),
            totals,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
