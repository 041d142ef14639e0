//! Property tests for the visibility resolver.

use proptest::prelude::*;

use cfe_model::{ContentSchema, FieldDescriptor, FieldValue};
use cfe_rules::{Condition, ConditionalRule, RuleSet, StateSnapshot, resolve_visible};

const FIELD_IDS: [&str; 6] = ["title", "postVariant", "rating", "interviewee", "body", "teaser"];
const VALUES: [&str; 3] = ["standard", "review", "interview"];

fn schema() -> ContentSchema {
    ContentSchema::new(
        "en-US",
        FIELD_IDS.iter().map(|id| FieldDescriptor::new(*id)).collect(),
    )
}

prop_compose! {
    fn arb_condition()(
        controlling in prop::sample::select(&FIELD_IDS[..]),
        expected in prop::sample::select(&VALUES[..]),
    ) -> Condition {
        Condition {
            controlling_field_id: controlling.to_string(),
            expected_value: FieldValue::text(expected),
        }
    }
}

prop_compose! {
    fn arb_rule()(
        dependent in prop::sample::select(&FIELD_IDS[..]),
        conditions in prop::collection::vec(arb_condition(), 1..3),
    ) -> ConditionalRule {
        ConditionalRule {
            dependent_field_id: dependent.to_string(),
            conditions,
        }
    }
}

fn arb_rules() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec(arb_rule(), 0..4).prop_map(RuleSet::new)
}

fn arb_state() -> impl Strategy<Value = StateSnapshot> {
    prop::collection::btree_map(
        prop::sample::select(&FIELD_IDS[..]).prop_map(String::from),
        prop::sample::select(&VALUES[..]).prop_map(FieldValue::text),
        0..4,
    )
}

proptest! {
    #[test]
    fn output_is_an_ordered_subsequence_of_the_schema(
        rules in arb_rules(),
        state in arb_state(),
    ) {
        let schema = schema();
        let visible = resolve_visible(&schema, &rules, &state);
        let mut last_position = None;
        for field in &visible {
            let position = schema.position(&field.id).expect("field comes from schema");
            prop_assert!(last_position < Some(position));
            last_position = Some(position);
        }
    }

    #[test]
    fn unconditional_fields_are_always_visible(
        rules in arb_rules(),
        state in arb_state(),
    ) {
        let schema = schema();
        let visible = resolve_visible(&schema, &rules, &state);
        for field in &schema.fields {
            if !rules.is_conditional(&field.id) {
                prop_assert!(visible.iter().any(|candidate| candidate.id == field.id));
            }
        }
    }

    #[test]
    fn resolution_is_idempotent(
        rules in arb_rules(),
        state in arb_state(),
    ) {
        let schema = schema();
        let first = resolve_visible(&schema, &rules, &state);
        let second = resolve_visible(&schema, &rules, &state);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_never_contains_duplicates(
        rules in arb_rules(),
        state in arb_state(),
    ) {
        let visible = resolve_visible(&schema(), &rules, &state);
        let mut ids: Vec<&str> = visible.iter().map(|field| field.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(before, ids.len());
    }
}
