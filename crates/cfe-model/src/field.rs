use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// One field of a content schema as supplied by the host platform.
///
/// Descriptors are immutable for the duration of an editing session;
/// display order is implicit in their position within the schema's
/// field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field identifier, unique within the schema.
    pub id: String,

    /// Human-readable name shown by the host editor.
    #[serde(default)]
    pub label: Option<String>,

    /// Locale-keyed default value, e.g. `{"en-US": "standard"}`.
    #[serde(default)]
    pub default_value: Option<BTreeMap<String, FieldValue>>,

    /// Allowed values for select-style fields (the host's `in`
    /// validation).
    #[serde(default)]
    pub allowed_values: Option<Vec<String>>,

    /// Which input widget the host should render for this field.
    /// Consumed by the host's rendering layer, not by the engine.
    #[serde(default)]
    pub widget_id: Option<String>,
}

impl FieldDescriptor {
    /// Minimal descriptor with just an id; everything else unset.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            default_value: None,
            allowed_values: None,
            widget_id: None,
        }
    }

    /// Resolve the default value for a locale, if one is configured.
    pub fn default_for_locale(&self, locale: &str) -> Option<&FieldValue> {
        self.default_value.as_ref().and_then(|map| map.get(locale))
    }
}
