use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{CalorieError, Result};

/// One food item available for packing.
///
/// Items are immutable once built and compared by value. Collections hold
/// them behind an [`Arc`] so candidate subsets share items instead of
/// copying them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    description: String,
    weight: f64,
    calories: f64,
}

/// Ordered collection of shared food items.
pub type FoodVector = Vec<Arc<FoodItem>>;

impl FoodItem {
    /// Build a validated item.
    ///
    /// The description must be non-empty and the weight (in ounces) finite
    /// and positive. Calories must be finite but may be negative.
    pub fn new(description: impl Into<String>, weight: f64, calories: f64) -> Result<Self> {
        let description = description.into();

        if description.trim().is_empty() {
            return Err(CalorieError::InvalidItem(
                "description must not be empty".to_string(),
            ));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CalorieError::InvalidItem(format!(
                "{}: weight must be positive, got {}",
                description, weight
            )));
        }
        if !calories.is_finite() {
            return Err(CalorieError::InvalidItem(format!(
                "{}: calories must be a finite number, got {}",
                description, calories
            )));
        }

        Ok(Self {
            description,
            weight,
            calories,
        })
    }

    /// Build a validated item already wrapped in a shared handle.
    pub fn shared(description: impl Into<String>, weight: f64, calories: f64) -> Result<Arc<Self>> {
        Self::new(description, weight, calories).map(Arc::new)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Weight in ounces.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Calories per ounce.
    #[inline]
    pub fn density(&self) -> f64 {
        self.calories / self.weight
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} oz, {} cal)",
            self.description, self.weight, self.calories
        )
    }
}
