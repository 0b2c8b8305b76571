use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::entities::quote::Quote;
use crate::usecase::ports::baseline::{BaselineSource, FetchError};
use crate::usecase::services::persistence::PersistenceGateway;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to parse baseline quotes: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Baseline,
    Persisted,
}

impl DataOrigin {
    pub fn message(self) -> &'static str {
        match self {
            DataOrigin::Baseline => "Loaded initial quotes from the data file",
            DataOrigin::Persisted => "Loaded locally saved quotes",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrapped {
    pub quotes: Vec<Quote>,
    pub origin: DataOrigin,
}

pub struct BootstrapService {
    source: Arc<dyn BaselineSource>,
    gateway: PersistenceGateway,
}

impl BootstrapService {
    pub fn new(source: Arc<dyn BaselineSource>, gateway: PersistenceGateway) -> Self {
        Self { source, gateway }
    }

    /// The baseline must fetch and parse even when a persisted collection
    /// exists; the persisted one then replaces it wholesale.
    pub fn load(&self) -> Result<Bootstrapped, BootstrapError> {
        let text = self.source.fetch()?;
        let baseline = parse_baseline(&text)?;

        let loaded = match self.gateway.load() {
            Some(stored) => Bootstrapped {
                quotes: stored,
                origin: DataOrigin::Persisted,
            },
            None => Bootstrapped {
                quotes: baseline,
                origin: DataOrigin::Baseline,
            },
        };

        info!(
            source = %self.source.describe(),
            origin = ?loaded.origin,
            count = loaded.quotes.len(),
            "bootstrapped quotes"
        );
        Ok(loaded)
    }
}

pub fn parse_baseline(text: &str) -> Result<Vec<Quote>, BootstrapError> {
    let text = text.trim_start_matches('\u{feff}');
    Ok(serde_json::from_str::<Vec<Quote>>(text)?)
}
