use std::io::ErrorKind;
use std::path::PathBuf;

use crate::usecase::ports::baseline::{BaselineSource, FetchError};

/// Baseline quotes read from a text file shipped next to the app.
pub struct FileBaselineSource {
    pub path: PathBuf,
}

impl FileBaselineSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BaselineSource for FileBaselineSource {
    fn fetch(&self) -> Result<String, FetchError> {
        std::fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => FetchError::NotFound(self.path.clone()),
            _ => FetchError::Unreadable {
                path: self.path.clone(),
                source,
            },
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
