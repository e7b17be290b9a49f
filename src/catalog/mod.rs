mod loader;
mod search;

pub use loader::{load_food_database, load_food_database_from_reader};
pub use search::{search_foods, SearchMatch};
