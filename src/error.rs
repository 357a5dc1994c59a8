use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog Error: {0}")]
    Catalog(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type DfResult<T> = Result<T, DeckForgeError>;
