use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::edit::{EditSession, FieldChange};
use crate::domain::entities::quote::{EditableFields, Quote, QuoteId};
use crate::usecase::services::persistence::PersistenceGateway;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("quote not found: {0}")]
    NotFound(QuoteId),
    #[error("quote is not being edited: {0}")]
    NotEditing(QuoteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub quote_name: String,
    pub persisted: bool,
}

impl SaveReceipt {
    pub fn message(&self) -> String {
        if self.persisted {
            format!("Saved edits for {}", self.quote_name)
        } else {
            format!("Saved edits for {} (local copy not written)", self.quote_name)
        }
    }
}

/// Owns the quote collection and the edit sessions open against it.
///
/// A quote is in VIEW when it has no session and in EDITING when it has one.
/// `change_field`, `save` and `cancel` require EDITING.
pub struct QuoteStore {
    quotes: Vec<Quote>,
    sessions: HashMap<QuoteId, EditSession>,
    gateway: PersistenceGateway,
}

impl QuoteStore {
    pub fn new(quotes: Vec<Quote>, gateway: PersistenceGateway) -> Self {
        Self {
            quotes,
            sessions: HashMap::new(),
            gateway,
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, id: &QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|quote| &quote.id == id)
    }

    pub fn is_editing(&self, id: &QuoteId) -> bool {
        self.sessions.contains_key(id)
    }

    #[cfg(test)]
    pub fn session(&self, id: &QuoteId) -> Option<&EditSession> {
        self.sessions.get(id)
    }

    /// Session values while editing, committed values otherwise.
    pub fn displayed_fields(&self, id: &QuoteId) -> Option<EditableFields> {
        match self.sessions.get(id) {
            Some(session) => Some(session.fields.clone()),
            None => self.get(id).map(Quote::editable_fields),
        }
    }

    pub fn begin_edit(&mut self, id: &QuoteId) -> Result<(), StoreError> {
        let quote = self
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let session = EditSession::begin(id.clone(), quote.editable_fields());
        if self.sessions.insert(id.clone(), session).is_some() {
            debug!(quote_id = %id, "replaced existing edit session");
        } else {
            debug!(quote_id = %id, "began editing");
        }
        Ok(())
    }

    pub fn change_field(&mut self, id: &QuoteId, change: FieldChange) -> Result<(), StoreError> {
        self.ensure_known(id)?;
        let session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotEditing(id.clone()))?;
        debug!(quote_id = %id, field = change.field_name(), "changed field");
        session.apply(change);
        Ok(())
    }

    /// Commits the session onto the quote, then persists the whole
    /// collection.
    pub fn save(&mut self, id: &QuoteId) -> Result<SaveReceipt, StoreError> {
        self.ensure_known(id)?;
        let session = self
            .sessions
            .remove(id)
            .ok_or_else(|| StoreError::NotEditing(id.clone()))?;

        let quote = self
            .quotes
            .iter_mut()
            .find(|quote| &quote.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        quote.apply_fields(session.fields);
        let quote_name = quote.quote_name.clone();

        let persisted = self.gateway.persist(&self.quotes);
        if persisted {
            info!(quote_id = %id, "saved quote");
        } else {
            warn!(quote_id = %id, "saved quote in memory only");
        }

        Ok(SaveReceipt {
            quote_name,
            persisted,
        })
    }

    pub fn cancel(&mut self, id: &QuoteId) -> Result<(), StoreError> {
        self.ensure_known(id)?;
        self.sessions
            .remove(id)
            .ok_or_else(|| StoreError::NotEditing(id.clone()))?;
        debug!(quote_id = %id, "cancelled editing");
        Ok(())
    }

    fn ensure_known(&self, id: &QuoteId) -> Result<(), StoreError> {
        if self.get(id).is_some() {
            Ok(())
        } else {
            Err(StoreError::NotFound(id.clone()))
        }
    }
}
