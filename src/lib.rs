pub mod catalog;
pub mod cli;
pub mod crosscheck;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod solver;

pub use error::{CalorieError, Result};
pub use models::{FoodItem, FoodVector, SolutionReport, Totals};
pub use solver::{
    dynamic_max_calories, exhaustive_max_calories, filter_food_vector, sum_food_vector, Algorithm,
};
