use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Crop not found: {0}")]
    CropNotFound(String),

    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Advisory error: {0}")]
    Advisory(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
