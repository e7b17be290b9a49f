use dialoguer::{Confirm, Input, Select};

use crate::error::{CalorieError, Result};
use crate::solver::Algorithm;

/// Parse a capacity typed by the user.
pub fn parse_capacity(input: &str) -> Result<f64> {
    let capacity: f64 = input
        .trim()
        .parse()
        .map_err(|_| CalorieError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !capacity.is_finite() || capacity < 0.0 {
        return Err(CalorieError::InvalidCapacity(capacity));
    }

    Ok(capacity)
}

/// Prompt for the maximum total weight to carry.
pub fn prompt_capacity() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("How many ounces can you carry?")
        .default("500".to_string())
        .interact_text()?;

    parse_capacity(&input)
}

/// Prompt for the solving strategy.
pub fn prompt_algorithm() -> Result<Algorithm> {
    let options = [
        "dynamic (fast, whole-ounce capacity)",
        "exhaustive (every subset, fewer than 64 foods)",
    ];

    let selection = Select::new()
        .with_prompt("Which algorithm?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => Algorithm::Exhaustive,
        _ => Algorithm::Dynamic,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
