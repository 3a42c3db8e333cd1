use thiserror::Error;

#[derive(Error, Debug)]
pub enum TillRankError {
    #[error("Please select an employee")]
    NoEmployeeSelected,

    #[error("Employee data not found: {0}")]
    EmployeeNotFound(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidNumber { field: String, value: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TillRankError>;
