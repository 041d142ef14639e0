//! Declarative conditional-visibility rules.
//!
//! Rules are loaded once from a static JSON document at startup and
//! treated as immutable configuration for the rest of the session.
//! The wire shape is an ordered array of
//! `{ "dependentFieldId": ..., "conditions": [{ "controllingFieldId": ..., "expectedValue": ... }] }`.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use cfe_model::FieldValue;

use crate::error::{Result, RuleError};

/// A single equality condition: the controlling field must hold
/// exactly the expected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub controlling_field_id: String,
    pub expected_value: FieldValue,
}

/// Visibility rule for one dependent field.
///
/// Conditions are conjunctive: the dependent field is visible only
/// when every condition holds. Disjunctions across conditions of a
/// single rule are not supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    pub dependent_field_id: String,
    pub conditions: Vec<Condition>,
}

impl ConditionalRule {
    /// True when every condition's controlling field holds exactly the
    /// expected value. A controlling field absent from `state` never
    /// matches, so the dependent field stays hidden.
    pub fn is_satisfied(&self, state: &BTreeMap<String, FieldValue>) -> bool {
        self.conditions.iter().all(|condition| {
            state.get(&condition.controlling_field_id) == Some(&condition.expected_value)
        })
    }
}

/// The full rule configuration, in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<ConditionalRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<ConditionalRule>) -> Self {
        Self { rules }
    }

    /// Parse a rule configuration from its JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a rule configuration from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| RuleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| RuleError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionalRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule whose dependent field matches, if any. Later rules
    /// for the same dependent field are ignored.
    pub fn rule_for(&self, field_id: &str) -> Option<&ConditionalRule> {
        self.rules
            .iter()
            .find(|rule| rule.dependent_field_id == field_id)
    }

    /// Whether some rule conditions the display of this field.
    pub fn is_conditional(&self, field_id: &str) -> bool {
        self.rule_for(field_id).is_some()
    }

    /// Whether this field controls the display of another field.
    ///
    /// Only the first condition of each rule is consulted; controlling
    /// fields named solely in later conditions are not treated as
    /// managing. Known limitation; `lint` reports rules affected by
    /// it.
    pub fn is_managing(&self, field_id: &str) -> bool {
        self.rules.iter().any(|rule| {
            rule.conditions
                .first()
                .is_some_and(|condition| condition.controlling_field_id == field_id)
        })
    }

    /// Ids of every managing field (first-condition controlling ids).
    pub fn managing_field_ids(&self) -> BTreeSet<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.conditions.first())
            .map(|condition| condition.controlling_field_id.clone())
            .collect()
    }
}
