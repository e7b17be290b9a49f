pub mod prompts;
pub mod render;

pub use prompts::{parse_capacity, prompt_algorithm, prompt_capacity, prompt_yes_no};
pub use render::{display_food_vector, display_search_results, display_solution};
