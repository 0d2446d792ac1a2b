use guidebook_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    /// The legacy endpoint was unreachable or answered with an error status.
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The legacy payload is not a JSON array of records.
    #[error("Malformed legacy data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ImportError>;
