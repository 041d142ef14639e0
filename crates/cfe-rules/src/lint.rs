//! Deploy-time sanity checks for rule configuration.
//!
//! The runtime engine never consults this: unknown field references
//! simply produce no matches there. `lint` exists so that a broken
//! configuration is caught when it ships, not debugged through a
//! mysteriously hidden field.

use serde::Serialize;

use cfe_model::{ContentSchema, FieldValue};

use crate::ruleset::RuleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintCode {
    /// Rule's dependent field id does not exist in the schema.
    UnknownDependentField,
    /// A condition's controlling field id does not exist in the schema.
    UnknownControllingField,
    /// A later rule for a dependent field that already has one; the
    /// first rule wins and the later one is dead configuration.
    DuplicateRule,
    /// Expected value is not among the controlling field's allowed
    /// values, so the condition can never pass.
    ValueNotAllowed,
    /// Controlling field referenced only in a non-first condition.
    /// Such fields are never managed, so the rule can never match.
    UnmanagedControllingField,
}

#[derive(Debug, Clone, Serialize)]
pub struct LintWarning {
    pub code: LintCode,
    pub field_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub rules: usize,
    pub fields: usize,
    pub warnings: Vec<LintWarning>,
}

impl LintReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Check a rule configuration against the schema it will run with.
pub fn lint(schema: &ContentSchema, rules: &RuleSet) -> LintReport {
    let mut warnings = Vec::new();
    let mut seen_dependents: Vec<&str> = Vec::new();

    for rule in rules.iter() {
        let dependent = rule.dependent_field_id.as_str();
        if seen_dependents.contains(&dependent) {
            warnings.push(LintWarning {
                code: LintCode::DuplicateRule,
                field_id: dependent.to_string(),
                message: format!(
                    "field '{dependent}' already has a rule; only the first rule is consulted"
                ),
            });
        } else {
            seen_dependents.push(dependent);
        }

        if schema.field(dependent).is_none() {
            warnings.push(LintWarning {
                code: LintCode::UnknownDependentField,
                field_id: dependent.to_string(),
                message: format!("dependent field '{dependent}' is not part of the schema"),
            });
        }

        for (index, condition) in rule.conditions.iter().enumerate() {
            let controlling = condition.controlling_field_id.as_str();
            match schema.field(controlling) {
                None => {
                    warnings.push(LintWarning {
                        code: LintCode::UnknownControllingField,
                        field_id: controlling.to_string(),
                        message: format!(
                            "controlling field '{controlling}' is not part of the schema"
                        ),
                    });
                }
                Some(field) => {
                    if let (Some(allowed), FieldValue::Text(expected)) =
                        (field.allowed_values.as_ref(), &condition.expected_value)
                        && !allowed.contains(expected)
                    {
                        warnings.push(LintWarning {
                            code: LintCode::ValueNotAllowed,
                            field_id: controlling.to_string(),
                            message: format!(
                                "'{expected}' is not an allowed value of '{controlling}'"
                            ),
                        });
                    }
                }
            }

            if index > 0 && !rules.is_managing(controlling) {
                warnings.push(LintWarning {
                    code: LintCode::UnmanagedControllingField,
                    field_id: controlling.to_string(),
                    message: format!(
                        "'{controlling}' only appears past the first condition of a rule; \
                         its value is never managed and rule '{dependent}' can never match"
                    ),
                });
            }
        }
    }

    LintReport {
        rules: rules.len(),
        fields: schema.fields.len(),
        warnings,
    }
}
