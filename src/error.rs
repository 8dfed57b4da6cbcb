use crate::model::Collection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("{collection}: store operation failed: {cause:#}")]
    Store {
        collection: Collection,
        cause: anyhow::Error,
    },
    #[error("{collection}: store returned {got} id(s) for {expected} document(s)")]
    IdCount {
        collection: Collection,
        expected: usize,
        got: usize,
    },
    #[error("serializing document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeedError {
    pub(crate) fn store(collection: Collection, cause: anyhow::Error) -> Self {
        SeedError::Store { collection, cause }
    }
}
