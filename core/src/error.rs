use std::path::PathBuf;

/// Failure taxonomy for the batch calculator.
///
/// Every validation failure rejects a single operation and leaves prior
/// state untouched; there are no retries and no fatal errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("batch quantity must be a positive number of kilograms")]
    InvalidQuantity,

    #[error("pot count must be a positive whole number")]
    InvalidPotCount,

    #[error("invalid ingredient: {0}")]
    InvalidIngredient(String),

    #[error("no ingredient named '{0}'")]
    NotFound(String),

    #[error("an ingredient named '{0}' already exists")]
    DuplicateName(String),

    #[error("failed to open store at {path}: {source}")]
    OpenStore {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("corrupt stored value: {0}")]
    CorruptValue(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
