use crate::domain::entities::quote::{
    ClubCosting, Costing, EditableFields, FobPort, QuoteId, Supplier,
};

/// Buffered copy of a quote's editable fields while it is being edited.
/// Lives only in memory; never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub quote_id: QuoteId,
    pub fields: EditableFields,
}

impl EditSession {
    pub fn begin(quote_id: QuoteId, fields: EditableFields) -> Self {
        Self { quote_id, fields }
    }

    pub fn apply(&mut self, change: FieldChange) {
        let fields = &mut self.fields;
        match change {
            FieldChange::QuoteName(value) => fields.quote_name = value,
            FieldChange::ItemName(value) => fields.item_name = value,
            FieldChange::ItemDescription(value) => fields.item_description = value,
            FieldChange::QuoteDate(value) => fields.quote_date = value,
            FieldChange::CommittedFlag(value) => fields.committed_flag = value,
            FieldChange::Supplier(value) => fields.supplier = value,
            FieldChange::FobPort(value) => fields.fob_port = value,
            FieldChange::Costing(value) => fields.costing = value,
            FieldChange::ClubCosting(value) => fields.club_costing = value,
        }
    }
}

/// A single-field replacement inside an [`EditSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    QuoteName(String),
    ItemName(String),
    ItemDescription(String),
    QuoteDate(String),
    CommittedFlag(bool),
    Supplier(Supplier),
    FobPort(FobPort),
    Costing(Costing),
    ClubCosting(ClubCosting),
}

impl FieldChange {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldChange::QuoteName(_) => "quoteName",
            FieldChange::ItemName(_) => "itemName",
            FieldChange::ItemDescription(_) => "itemDescription",
            FieldChange::QuoteDate(_) => "quoteDate",
            FieldChange::CommittedFlag(_) => "committedFlag",
            FieldChange::Supplier(_) => "supplier",
            FieldChange::FobPort(_) => "fobPort",
            FieldChange::Costing(_) => "costing",
            FieldChange::ClubCosting(_) => "clubCosting",
        }
    }
}
