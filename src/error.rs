use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalorieError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid food item: {0}")]
    InvalidItem(String),

    #[error("Filter limit must be positive, got {0}")]
    InvalidLimit(usize),

    #[error("Capacity must be a non-negative number, got {0}")]
    InvalidCapacity(f64),

    #[error("Exhaustive search supports fewer than {max} items, got {count}; filter the catalog first")]
    TooManyItems { count: usize, max: usize },

    #[error("Dynamic programming table of {cells} cells exceeds the limit of {max}")]
    TableTooLarge { cells: usize, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No food items to choose from")]
    EmptyCatalog,
}

impl CalorieError {
    /// Whether this error is a caller mistake rather than a data source failure.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CalorieError::InvalidLimit(_)
                | CalorieError::InvalidCapacity(_)
                | CalorieError::TooManyItems { .. }
                | CalorieError::TableTooLarge { .. }
                | CalorieError::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CalorieError>;
