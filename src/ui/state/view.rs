use std::ops::Range;

use crate::domain::costing::{normalize_material_cost, total_material_cost};
use crate::domain::entities::quote::{EditableFields, Quote, QuoteId};
use crate::ui::format::format_currency;
use crate::usecase::services::quote_store::QuoteStore;

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRowView {
    pub id: QuoteId,
    pub editing: bool,
    pub fields: EditableFields,
}

pub fn row_views(store: &QuoteStore, range: Range<usize>) -> Vec<QuoteRowView> {
    store
        .quotes()
        .get(range)
        .unwrap_or_default()
        .iter()
        .map(|quote| QuoteRowView {
            id: quote.id.clone(),
            editing: store.is_editing(&quote.id),
            fields: store
                .displayed_fields(&quote.id)
                .unwrap_or_else(|| quote.editable_fields()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialLineView {
    pub description: String,
    pub unit_cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialDetailView {
    pub lines: Vec<MaterialLineView>,
    pub total: String,
}

impl MaterialDetailView {
    /// Built from the committed quote, not from any open edit session.
    pub fn from_quote(quote: &Quote) -> Self {
        let lines = quote
            .costing
            .component_material_costing
            .iter()
            .map(normalize_material_cost)
            .map(|material| MaterialLineView {
                unit_cost: format_currency(material.unit_cost()),
                description: material.material_description,
            })
            .collect();

        Self {
            lines,
            total: format_currency(total_material_cost(&quote.costing)),
        }
    }
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size) - 1)
}

pub fn page_range(page: usize, total: usize, page_size: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..total;
    }
    let page = clamp_page(page, total, page_size);
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    start..end
}
