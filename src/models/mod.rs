pub mod food;
pub mod solution;

pub use food::{FoodItem, FoodVector};
pub use solution::{SolutionReport, Totals};
