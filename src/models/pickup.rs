use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::fee::FeeSelection;
use crate::models::field::PickupField;

/// Current contents of the pickup-request form
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupForm {
    pub values: BTreeMap<PickupField, String>,
    pub items: BTreeSet<String>,
    pub services: FeeSelection,
}

impl PickupForm {
    pub fn value(&self, field: PickupField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: PickupField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn clear(&mut self, field: PickupField) {
        self.values.remove(&field);
    }
}
