use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::entities::quote::Quote;
use crate::usecase::ports::storage::{SlotStore, StorageError};

/// Best-effort persistence of the whole quote collection in one slot.
/// Failures are logged and swallowed; callers keep their in-memory state.
#[derive(Clone)]
pub struct PersistenceGateway {
    slots: Arc<dyn SlotStore>,
    key: String,
}

impl PersistenceGateway {
    pub fn new(slots: Arc<dyn SlotStore>, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    /// Returns whether the write was accepted by the backing store.
    pub fn persist(&self, quotes: &[Quote]) -> bool {
        match self.try_persist(quotes) {
            Ok(()) => {
                debug!(key = %self.key, count = quotes.len(), "persisted quotes");
                true
            }
            Err(err) => {
                error!(key = %self.key, error = %err, "failed to persist quotes");
                false
            }
        }
    }

    pub fn load(&self) -> Option<Vec<Quote>> {
        match self.try_load() {
            Ok(Some(quotes)) => {
                debug!(key = %self.key, count = quotes.len(), "loaded persisted quotes");
                Some(quotes)
            }
            Ok(None) => None,
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring unreadable persisted quotes");
                None
            }
        }
    }

    fn try_persist(&self, quotes: &[Quote]) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(quotes).map_err(StorageError::Encode)?;
        self.slots.write_slot(&self.key, &encoded)
    }

    fn try_load(&self) -> Result<Option<Vec<Quote>>, StorageError> {
        let Some(stored) = self.slots.read_slot(&self.key)? else {
            return Ok(None);
        };
        if stored.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Vec<Quote>>(&stored)
            .map(Some)
            .map_err(StorageError::Decode)
    }
}
