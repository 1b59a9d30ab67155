//! # Subcommand Handlers
//!
//! Drives each handler against catalog files written to a temp directory
//! and checks both the exit code and the rendered output.

use std::path::{Path, PathBuf};

use richenum_cli::check::{run_check, CheckArgs};
use richenum_cli::choices::{run_choices, ChoicesArgs};
use richenum_cli::inspect::{run_inspect, InspectArgs};
use richenum_cli::lookup::{run_lookup, LookupArgs};
use richenum_cli::OutputFormat;

const CATALOG: &str = r#"
enums:
  - name: Vegetable
    members:
      - field: OKRA
        canonical_name: okra
        display_name: Okra
        attributes: { flavor: gross, aliases: [gumbo, ladyfinger] }
      - field: BROCCOLI
        canonical_name: broccoli
        display_name: Broccoli
        attributes: { flavor: delicious }
  - name: Breakfast
    kind: ordered
    members:
      - { field: COFFEE, canonical_name: coffee, display_name: Coffee, index: 0 }
      - { field: FRUIT, canonical_name: fruit, display_name: Fruit, index: 2 }
      - { field: OATMEAL, canonical_name: oatmeal, display_name: Oatmeal, index: 1 }
"#;

fn write_catalog(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("catalog.yaml");
    std::fs::write(&path, contents).expect("write catalog");
    path
}

fn lookup_args(catalog: PathBuf, enum_name: &str) -> LookupArgs {
    LookupArgs {
        catalog,
        enum_name: enum_name.to_string(),
        canonical: None,
        display: None,
        index: None,
        field: None,
        value: None,
    }
}

fn capture(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<u8>) -> (u8, String) {
    let mut out = Vec::new();
    let code = run(&mut out).expect("handler should not fail operationally");
    (code, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_check_valid_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let args = CheckArgs {
        catalog: write_catalog(dir.path(), CATALOG),
    };
    let (code, text) = capture(|out| run_check(&args, OutputFormat::Text, out));
    assert_eq!(code, 0);
    assert!(text.contains("Vegetable (RichEnum): 2 member(s)"));
    assert!(text.contains("Breakfast (OrderedRichEnum): 3 member(s)"));
    assert!(text.contains("OK:"));
}

#[test]
fn test_check_invalid_catalog_fails_with_reason() {
    let dir = tempfile::tempdir().unwrap();
    let args = CheckArgs {
        catalog: write_catalog(
            dir.path(),
            "enums:\n  - name: Breakfast\n    kind: ordered\n    members:\n      - { field: A, canonical_name: a, display_name: A, index: 0 }\n      - { field: B, canonical_name: b, display_name: B, index: 0 }\n",
        ),
    };
    let (code, json) = capture(|out| run_check(&args, OutputFormat::Json, out));
    assert_eq!(code, 1);
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(report["valid"], false);
    assert!(report["error"].as_str().unwrap().contains("Index already defined: 0."));
}

#[test]
fn test_inspect_lists_members_in_stored_order() {
    let dir = tempfile::tempdir().unwrap();
    let args = InspectArgs {
        catalog: write_catalog(dir.path(), CATALOG),
        enum_name: Some("Breakfast".into()),
    };
    let (code, text) = capture(|out| run_inspect(&args, OutputFormat::Text, out));
    assert_eq!(code, 0);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Breakfast (OrderedRichEnum, 3 member(s))");
    assert_eq!(lines[1], "  COFFEE = <OrderedCatalogValue #0: coffee ('Coffee')>");
    assert_eq!(lines[2], "  OATMEAL = <OrderedCatalogValue #1: oatmeal ('Oatmeal')>");
    assert_eq!(lines[3], "  FRUIT = <OrderedCatalogValue #2: fruit ('Fruit')>");
}

#[test]
fn test_inspect_json_includes_attributes() {
    let dir = tempfile::tempdir().unwrap();
    let args = InspectArgs {
        catalog: write_catalog(dir.path(), CATALOG),
        enum_name: None,
    };
    let (_, json) = capture(|out| run_inspect(&args, OutputFormat::Json, out));
    let enums: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(enums[0]["name"], "Vegetable");
    assert_eq!(enums[0]["members"][0]["attributes"]["aliases"], serde_json::json!(["gumbo", "ladyfinger"]));
    assert_eq!(enums[1]["members"][2]["index"], 2);
}

#[test]
fn test_inspect_unknown_enum_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = InspectArgs {
        catalog: write_catalog(dir.path(), CATALOG),
        enum_name: Some("Meat".into()),
    };
    let err = run_inspect(&args, OutputFormat::Text, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Meat"));
}

#[test]
fn test_lookup_by_each_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), CATALOG);

    let mut by_alias = lookup_args(path.clone(), "Vegetable");
    by_alias.field = Some("aliases".into());
    by_alias.value = Some("ladyfinger".into());
    let (code, text) = capture(|out| run_lookup(&by_alias, OutputFormat::Text, out));
    assert_eq!(code, 0);
    assert_eq!(text.trim(), "OKRA = <CatalogValue: okra ('Okra')>");

    let mut by_index = lookup_args(path.clone(), "Breakfast");
    by_index.index = Some(1);
    let (code, json) = capture(|out| run_lookup(&by_index, OutputFormat::Json, out));
    assert_eq!(code, 0);
    let member: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(member["field"], "OATMEAL");
    assert_eq!(member["canonical_name"], "oatmeal");

    let mut by_display = lookup_args(path, "Breakfast");
    by_display.display = Some("Fruit".into());
    let (code, _) = capture(|out| run_lookup(&by_display, OutputFormat::Text, out));
    assert_eq!(code, 0);
}

#[test]
fn test_lookup_miss_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = lookup_args(write_catalog(dir.path(), CATALOG), "Vegetable");
    args.canonical = Some("parsnip".into());
    let (code, text) = capture(|out| run_lookup(&args, OutputFormat::Text, out));
    assert_eq!(code, 1);
    assert_eq!(
        text.trim(),
        "NOT FOUND: could not find member matching canonical_name = parsnip in enum Vegetable"
    );
}

#[test]
fn test_index_lookup_on_rich_enum_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = lookup_args(write_catalog(dir.path(), CATALOG), "Vegetable");
    args.index = Some(0);
    assert!(run_lookup(&args, OutputFormat::Text, &mut Vec::new()).is_err());
}

#[test]
fn test_choices_with_custom_fields() {
    let dir = tempfile::tempdir().unwrap();
    let args = ChoicesArgs {
        catalog: write_catalog(dir.path(), CATALOG),
        enum_name: "Vegetable".into(),
        value_field: "flavor".into(),
        display_field: "canonical_name".into(),
    };
    let (code, text) = capture(|out| run_choices(&args, OutputFormat::Text, out));
    assert_eq!(code, 0);
    assert_eq!(text, "gross\tokra\ndelicious\tbroccoli\n");
}

#[test]
fn test_choices_on_missing_field_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = ChoicesArgs {
        catalog: write_catalog(dir.path(), CATALOG),
        enum_name: "Breakfast".into(),
        value_field: "flavor".into(),
        display_field: "display_name".into(),
    };
    let err = run_choices(&args, OutputFormat::Json, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("flavor"));
}
