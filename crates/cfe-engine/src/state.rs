//! In-memory state for managing fields.

use std::collections::BTreeSet;

use tracing::debug;

use cfe_model::{ContentSchema, FieldValue};
use cfe_rules::StateSnapshot;

/// Current values of the fields that control the visibility of other
/// fields.
///
/// The key set is fixed when the session starts: exactly the fields
/// the rule configuration names as controlling. This is the only
/// mutable state the engine owns.
#[derive(Debug, Clone)]
pub struct ManagedState {
    values: StateSnapshot,
}

impl ManagedState {
    /// Seed every managing field from its locale-resolved schema
    /// default, or [`FieldValue::Empty`] when no default exists.
    pub fn initialize(schema: &ContentSchema, managing_ids: &BTreeSet<String>) -> Self {
        let values = managing_ids
            .iter()
            .map(|id| {
                let value = schema
                    .field(id)
                    .and_then(|field| field.default_for_locale(&schema.default_locale))
                    .cloned()
                    .unwrap_or_default();
                (id.clone(), value)
            })
            .collect();
        Self { values }
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.values.contains_key(field_id)
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    /// Replace the stored value for a managing field.
    ///
    /// Updates for unrecognized ids are a silent no-op; callers are
    /// expected to have validated the id. Returns whether the value
    /// was stored.
    pub fn update(&mut self, field_id: &str, value: FieldValue) -> bool {
        match self.values.get_mut(field_id) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                debug!(field = %field_id, "ignoring update for unmanaged field");
                false
            }
        }
    }

    /// Current mapping, used as resolver input.
    pub fn snapshot(&self) -> &StateSnapshot {
        &self.values
    }
}
