use std::collections::BTreeSet;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::quote::QuoteId;
use crate::usecase::services::quote_store::QuoteStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

pub struct AppState {
    pub store: Signal<Option<QuoteStore>>,
    pub load_state: Signal<LoadState>,
    pub expanded: Signal<BTreeSet<QuoteId>>,
    pub page: Signal<usize>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: use_signal(|| None::<QuoteStore>),
            load_state: use_signal(|| LoadState::Loading),
            expanded: use_signal(BTreeSet::<QuoteId>::new),
            page: use_signal(|| 0_usize),
            status: use_signal(String::new),
        }
    }
}

pub fn toggle_expanded(expanded: &mut BTreeSet<QuoteId>, id: &QuoteId) {
    if !expanded.remove(id) {
        expanded.insert(id.clone());
    }
}
