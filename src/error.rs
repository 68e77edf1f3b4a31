use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProteinError {
    #[error("Invalid food: {0}")]
    InvalidFood(String),

    #[error("Catalog has {len} foods; exhaustive search supports at most {max}")]
    CatalogTooLarge { len: usize, max: usize },

    #[error("Malformed record on line {line}: {fields} fields")]
    MalformedRecord { line: u64, fields: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ProteinError>;
