//! Visible-set computation.

use std::collections::BTreeMap;

use tracing::trace;

use cfe_model::{ContentSchema, FieldDescriptor, FieldValue};

use crate::classify::{FieldClass, classify};
use crate::ruleset::RuleSet;

/// Snapshot of the managed controlling-field values used as resolver
/// input.
pub type StateSnapshot = BTreeMap<String, FieldValue>;

/// Compute the ordered set of fields that should be visible.
///
/// A field is included iff no rule references it as dependent, or its
/// rule is satisfied by `state` (every condition passes under strict
/// equality; a controlling field absent from `state` never matches).
/// The result is free of duplicates and preserves schema declaration
/// order. Pure: identical inputs yield identical output, order
/// included.
pub fn resolve_visible(
    schema: &ContentSchema,
    rules: &RuleSet,
    state: &StateSnapshot,
) -> Vec<FieldDescriptor> {
    let visible: Vec<FieldDescriptor> = schema
        .fields
        .iter()
        .filter(|field| match classify(&field.id, rules) {
            FieldClass::Unconditional => true,
            FieldClass::Conditional => rules
                .rule_for(&field.id)
                .is_some_and(|rule| rule.is_satisfied(state)),
        })
        .cloned()
        .collect();
    trace!(
        total = schema.fields.len(),
        visible = visible.len(),
        "resolved visible field set"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::{Condition, ConditionalRule};

    fn schema() -> ContentSchema {
        ContentSchema::new(
            "en-US",
            vec![
                FieldDescriptor::new("title"),
                FieldDescriptor::new("postVariant"),
                FieldDescriptor::new("rating"),
                FieldDescriptor::new("body"),
            ],
        )
    }

    fn rules() -> RuleSet {
        RuleSet::new(vec![ConditionalRule {
            dependent_field_id: "rating".to_string(),
            conditions: vec![Condition {
                controlling_field_id: "postVariant".to_string(),
                expected_value: FieldValue::text("review"),
            }],
        }])
    }

    fn ids(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|field| field.id.as_str()).collect()
    }

    #[test]
    fn hides_dependent_field_until_rule_matches() {
        let schema = schema();
        let rules = rules();
        let mut state = StateSnapshot::new();
        state.insert("postVariant".to_string(), FieldValue::text("standard"));

        let visible = resolve_visible(&schema, &rules, &state);
        assert_eq!(ids(&visible), vec!["title", "postVariant", "body"]);

        state.insert("postVariant".to_string(), FieldValue::text("review"));
        let visible = resolve_visible(&schema, &rules, &state);
        assert_eq!(ids(&visible), vec!["title", "postVariant", "rating", "body"]);
    }

    #[test]
    fn dependent_field_reappears_in_schema_order() {
        // The satisfied dependent field slots back into its declared
        // position, not at the end of the list.
        let schema = ContentSchema::new(
            "en-US",
            vec![
                FieldDescriptor::new("rating"),
                FieldDescriptor::new("title"),
            ],
        );
        let mut state = StateSnapshot::new();
        state.insert("postVariant".to_string(), FieldValue::text("review"));
        let visible = resolve_visible(&schema, &rules(), &state);
        assert_eq!(ids(&visible), vec!["rating", "title"]);
    }

    #[test]
    fn rule_for_unknown_schema_field_contributes_nothing() {
        let rules = RuleSet::new(vec![ConditionalRule {
            dependent_field_id: "ghost".to_string(),
            conditions: vec![Condition {
                controlling_field_id: "postVariant".to_string(),
                expected_value: FieldValue::text("review"),
            }],
        }]);
        let mut state = StateSnapshot::new();
        state.insert("postVariant".to_string(), FieldValue::text("review"));
        let visible = resolve_visible(&schema(), &rules, &state);
        assert_eq!(ids(&visible), vec!["title", "postVariant", "rating", "body"]);
    }

    #[test]
    fn empty_state_hides_all_conditional_fields() {
        let visible = resolve_visible(&schema(), &rules(), &StateSnapshot::new());
        assert_eq!(ids(&visible), vec!["title", "postVariant", "body"]);
    }
}
