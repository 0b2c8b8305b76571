use crate::domain::entities::quote::{ComponentMaterialCosting, Costing};

fn truthy(amount: Option<f64>) -> Option<f64> {
    amount.filter(|value| value.is_finite() && *value != 0.0)
}

impl ComponentMaterialCosting {
    /// Canonical unit cost: the primary spelling when it holds a non-zero
    /// amount, then the alternate spelling, then zero.
    pub fn unit_cost(&self) -> f64 {
        truthy(self.cost_per_selling_unit)
            .or_else(|| truthy(self.cost_per_selling_unit_alt))
            .unwrap_or(0.0)
    }
}

/// Copies the canonical unit cost into the primary field. Idempotent.
pub fn normalize_material_cost(material: &ComponentMaterialCosting) -> ComponentMaterialCosting {
    ComponentMaterialCosting {
        cost_per_selling_unit: Some(material.unit_cost()),
        ..material.clone()
    }
}

pub fn total_material_cost(costing: &Costing) -> f64 {
    costing
        .component_material_costing
        .iter()
        .map(ComponentMaterialCosting::unit_cost)
        .sum()
}
