use std::path::PathBuf;

use crate::infra::sqlite::slots::{read_slot, write_slot};
use crate::usecase::ports::storage::{SlotStore, StorageError};

pub struct SqliteSlotStore {
    pub db_path: PathBuf,
}

impl SqliteSlotStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl SlotStore for SqliteSlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        read_slot(&self.db_path, key).map_err(|err| StorageError::Backend(format!("{err:#}")))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        write_slot(&self.db_path, key, value)
            .map_err(|err| StorageError::Backend(format!("{err:#}")))
    }
}
