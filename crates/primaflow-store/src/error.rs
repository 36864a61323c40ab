use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend read failed for key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("backend write failed for key {key}: {reason}")]
    Write { key: String, reason: String },
}
