use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub String);

impl From<&str> for QuoteId {
    fn from(value: &str) -> Self {
        QuoteId(value.to_string())
    }
}

impl From<String> for QuoteId {
    fn from(value: String) -> Self {
        QuoteId(value)
    }
}

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FobPort {
    pub country_of_origin: String,
}

/// One material line of a costing block.
///
/// Source files spell the unit cost either `costPerSellingUnit` or
/// `costPerSelling_unit`; both are kept as read so they round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMaterialCosting {
    pub material_description: String,
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_per_selling_unit: Option<f64>,
    #[serde(
        rename = "costPerSelling_unit",
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_per_selling_unit_alt: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Costing {
    pub first_cost: f64,
    #[serde(default)]
    pub component_material_costing: Vec<ComponentMaterialCosting>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubCosting {
    pub retail_price: f64,
}

/// Durable quote record. This is the only type written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub quote_name: String,
    pub item_name: String,
    pub item_description: String,
    pub quote_date: String,
    pub committed_flag: bool,
    pub supplier: Supplier,
    pub fob_port: FobPort,
    pub costing: Costing,
    pub club_costing: ClubCosting,
}

/// The user-editable subset of a [`Quote`] (everything but the id).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditableFields {
    pub quote_name: String,
    pub item_name: String,
    pub item_description: String,
    pub quote_date: String,
    pub committed_flag: bool,
    pub supplier: Supplier,
    pub fob_port: FobPort,
    pub costing: Costing,
    pub club_costing: ClubCosting,
}

impl Quote {
    pub fn editable_fields(&self) -> EditableFields {
        EditableFields {
            quote_name: self.quote_name.clone(),
            item_name: self.item_name.clone(),
            item_description: self.item_description.clone(),
            quote_date: self.quote_date.clone(),
            committed_flag: self.committed_flag,
            supplier: self.supplier.clone(),
            fob_port: self.fob_port.clone(),
            costing: self.costing.clone(),
            club_costing: self.club_costing.clone(),
        }
    }

    pub fn apply_fields(&mut self, fields: EditableFields) {
        let EditableFields {
            quote_name,
            item_name,
            item_description,
            quote_date,
            committed_flag,
            supplier,
            fob_port,
            costing,
            club_costing,
        } = fields;
        self.quote_name = quote_name;
        self.item_name = item_name;
        self.item_description = item_description;
        self.quote_date = quote_date;
        self.committed_flag = committed_flag;
        self.supplier = supplier;
        self.fob_port = fob_port;
        self.costing = costing;
        self.club_costing = club_costing;
    }
}

// Accepts numbers, numeric strings, null and "". Anything that is not a
// finite number reads as absent.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(amount_from_json(&value))
}

pub fn amount_from_json(value: &serde_json::Value) -> Option<f64> {
    let amount = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => {
            let trimmed = text.trim().replace(',', "");
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    amount.filter(|amount| amount.is_finite())
}
