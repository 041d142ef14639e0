//! Command implementations.

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use tracing::{debug, warn};

use cfe_engine::ManagedState;
use cfe_model::{ContentSchema, FieldValue};
use cfe_rules::{RuleSet, classify, lint, resolve_visible};

use crate::cli::{ConfigArgs, LintArgs, ResolveArgs};

fn load_config(args: &ConfigArgs) -> Result<(ContentSchema, RuleSet)> {
    let schema = ContentSchema::load(&args.schema).context("load schema")?;
    let rules = RuleSet::load(&args.rules).context("load rules")?;
    debug!(
        fields = schema.fields.len(),
        rules = rules.len(),
        "loaded configuration"
    );
    Ok((schema, rules))
}

pub fn run_fields(args: &ConfigArgs) -> Result<()> {
    let (schema, rules) = load_config(args)?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Class"),
        header_cell("Managing"),
        header_cell("Default"),
        header_cell("Widget"),
        header_cell("Allowed values"),
    ]);
    apply_table_style(&mut table);
    for field in &schema.fields {
        let default = field
            .default_for_locale(&schema.default_locale)
            .map(ToString::to_string)
            .unwrap_or_default();
        table.add_row(vec![
            field.id.clone(),
            classify(&field.id, &rules).as_str().to_string(),
            if rules.is_managing(&field.id) {
                "yes".to_string()
            } else {
                "-".to_string()
            },
            default,
            field.widget_id.clone().unwrap_or_default(),
            field
                .allowed_values
                .as_ref()
                .map(|values| values.join(", "))
                .unwrap_or_default(),
        ]);
    }
    println!("Locale: {}", schema.default_locale);
    println!("{table}");
    Ok(())
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let (schema, rules) = load_config(&args.config)?;
    let managing_ids = rules.managing_field_ids();
    let mut state = ManagedState::initialize(&schema, &managing_ids);
    for raw in &args.set {
        let (field_id, value) = parse_set_override(raw)?;
        if !state.update(&field_id, value) {
            warn!(field = %field_id, "--set ignored: not a managing field");
        }
    }

    let visible = resolve_visible(&schema, &rules, state.snapshot());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    for (field_id, value) in state.snapshot() {
        println!("State: {field_id} = {value}");
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Field"), header_cell("Label")]);
    apply_table_style(&mut table);
    for (index, field) in visible.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            field.id.clone(),
            field.label.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    println!(
        "{} of {} fields visible",
        visible.len(),
        schema.fields.len()
    );
    Ok(())
}

/// Run lint and report whether warnings were found.
pub fn run_lint(args: &LintArgs) -> Result<bool> {
    let (schema, rules) = load_config(&args.config)?;
    let report = lint(&schema, &rules);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.has_warnings());
    }

    if !report.has_warnings() {
        println!(
            "OK: {} rules checked against {} fields, no warnings",
            report.rules, report.fields
        );
        return Ok(false);
    }
    for warning in &report.warnings {
        println!("warning[{}]: {}", warning.field_id, warning.message);
    }
    println!("{} warnings", report.warnings.len());
    Ok(true)
}

/// Parse a `--set field=value` override.
///
/// `true`/`false` become booleans and an empty value clears the
/// field; everything else is text.
fn parse_set_override(raw: &str) -> Result<(String, FieldValue)> {
    let Some((field_id, value)) = raw.split_once('=') else {
        bail!("invalid --set '{raw}': expected FIELD=VALUE");
    };
    if field_id.is_empty() {
        bail!("invalid --set '{raw}': empty field id");
    }
    let value = match value {
        "" => FieldValue::Empty,
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        text => FieldValue::text(text),
    };
    Ok((field_id.to_string(), value))
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const SCHEMA_JSON: &str = r#"{
        "defaultLocale": "en-US",
        "fields": [
            { "id": "title", "label": "Title", "widgetId": "singleLine" },
            {
                "id": "postVariant",
                "defaultValue": { "en-US": "standard" },
                "allowedValues": ["standard", "review"]
            },
            { "id": "rating" }
        ]
    }"#;

    const RULES_JSON: &str = r#"[
        {
            "dependentFieldId": "rating",
            "conditions": [
                { "controllingFieldId": "postVariant", "expectedValue": "review" }
            ]
        }
    ]"#;

    fn write_config(dir: &Path, rules_json: &str) -> ConfigArgs {
        let schema = dir.join("schema.json");
        let rules = dir.join("rules.json");
        fs::write(&schema, SCHEMA_JSON).expect("write schema");
        fs::write(&rules, rules_json).expect("write rules");
        ConfigArgs { schema, rules }
    }

    #[test]
    fn fields_command_runs_against_disk_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = write_config(dir.path(), RULES_JSON);
        run_fields(&args).expect("fields command");
    }

    #[test]
    fn resolve_command_applies_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = ResolveArgs {
            config: write_config(dir.path(), RULES_JSON),
            set: vec!["postVariant=review".to_string()],
            json: true,
        };
        run_resolve(&args).expect("resolve command");
    }

    #[test]
    fn lint_command_reports_warnings_via_exit_status() {
        let dir = tempfile::tempdir().expect("tempdir");
        let clean = LintArgs {
            config: write_config(dir.path(), RULES_JSON),
            json: false,
        };
        assert!(!run_lint(&clean).expect("lint clean config"));

        let broken = r#"[
            {
                "dependentFieldId": "ghost",
                "conditions": [
                    { "controllingFieldId": "phantom", "expectedValue": "x" }
                ]
            }
        ]"#;
        let warned = LintArgs {
            config: write_config(dir.path(), broken),
            json: false,
        };
        assert!(run_lint(&warned).expect("lint broken config"));
    }

    #[test]
    fn load_config_surfaces_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = ConfigArgs {
            schema: dir.path().join("absent.json"),
            rules: dir.path().join("absent.json"),
        };
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn parses_text_bool_and_empty_overrides() {
        assert_eq!(
            parse_set_override("postVariant=review").expect("text"),
            ("postVariant".to_string(), FieldValue::text("review"))
        );
        assert_eq!(
            parse_set_override("hasSpoilers=true").expect("bool"),
            ("hasSpoilers".to_string(), FieldValue::Bool(true))
        );
        assert_eq!(
            parse_set_override("postVariant=").expect("empty"),
            ("postVariant".to_string(), FieldValue::Empty)
        );
    }

    #[test]
    fn rejects_malformed_overrides() {
        assert!(parse_set_override("postVariant").is_err());
        assert!(parse_set_override("=review").is_err());
    }
}
