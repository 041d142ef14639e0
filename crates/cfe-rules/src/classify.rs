//! Field classification against the rule configuration.

use crate::ruleset::RuleSet;

/// Whether a field's visibility depends on another field.
///
/// Classification is a pure function of the field id and the rule set.
/// Note that a field may be `Unconditional` and still manage other
/// fields (see [`RuleSet::is_managing`]); the two are independent
/// axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// No rule references the field as dependent; always visible.
    Unconditional,
    /// A rule conditions the field's visibility.
    Conditional,
}

impl FieldClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldClass::Unconditional => "unconditional",
            FieldClass::Conditional => "conditional",
        }
    }
}

/// Classify a schema field against the rule configuration.
pub fn classify(field_id: &str, rules: &RuleSet) -> FieldClass {
    if rules.is_conditional(field_id) {
        FieldClass::Conditional
    } else {
        FieldClass::Unconditional
    }
}
