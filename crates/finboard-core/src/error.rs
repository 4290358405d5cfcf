use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid date `{value}` on `{record}`")]
    InvalidDate { record: String, value: String },
    #[error("Budget not found: {0}")]
    BudgetNotFound(String),
    #[error("Pot not found: {0}")]
    PotNotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
}
