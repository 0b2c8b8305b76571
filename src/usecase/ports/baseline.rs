use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("baseline data not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read baseline data {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only source of the baseline quote document.
pub trait BaselineSource: Send + Sync {
    fn fetch(&self) -> Result<String, FetchError>;
    fn describe(&self) -> String;
}
