use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::FieldDescriptor;

/// The ordered field list of a content type, together with the
/// rendering context's default locale.
///
/// The declared field order is authoritative: the visible-set
/// computation sorts its output by position in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSchema {
    /// Default locale of the editing context, e.g. `en-US`.
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl ContentSchema {
    pub fn new(default_locale: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            default_locale: default_locale.into(),
            fields,
        }
    }

    /// Parse a schema from its JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a schema document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ModelError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up a field by id.
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Position of a field in declaration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.id == id)
    }

    /// Field ids in declaration order.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    const SCHEMA_JSON: &str = r#"{
        "defaultLocale": "en-US",
        "fields": [
            { "id": "title", "label": "Title", "widgetId": "singleLine" },
            {
                "id": "postVariant",
                "defaultValue": { "en-US": "standard" },
                "allowedValues": ["standard", "review", "interview"]
            },
            { "id": "rating" }
        ]
    }"#;

    #[test]
    fn parses_host_schema_document() {
        let schema = ContentSchema::from_json_str(SCHEMA_JSON).expect("parse schema");
        assert_eq!(schema.default_locale, "en-US");
        assert_eq!(schema.fields.len(), 3);
        assert_eq!(schema.position("postVariant"), Some(1));
        assert_eq!(
            schema
                .field("postVariant")
                .and_then(|field| field.default_for_locale("en-US")),
            Some(&FieldValue::text("standard"))
        );
    }

    #[test]
    fn default_locale_falls_back_when_absent() {
        let schema =
            ContentSchema::from_json_str(r#"{ "fields": [] }"#).expect("parse schema");
        assert_eq!(schema.default_locale, "en-US");
    }

    #[test]
    fn unknown_field_lookups_return_none() {
        let schema = ContentSchema::from_json_str(SCHEMA_JSON).expect("parse schema");
        assert!(schema.field("missing").is_none());
        assert!(schema.position("missing").is_none());
    }

    #[test]
    fn load_reports_missing_file_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.json");
        let error = ContentSchema::load(&path).expect_err("missing file");
        assert!(error.to_string().contains("nope.json"));
    }
}
