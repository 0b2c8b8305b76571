use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("failed to encode quotes: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode stored quotes: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A durable key/value area holding whole serialized documents, one per key.
pub trait SlotStore: Send + Sync {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
