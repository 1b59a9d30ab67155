//! # richenum-cli — Catalog Command-Line Interface
//!
//! ## Subcommands
//!
//! - `check` — load and validate a catalog, summarizing each enum
//! - `inspect` — list enums and their members
//! - `lookup` — find one member by canonical name, display name, index,
//!   or any attribute
//! - `choices` — print `(value, display)` pairs for legacy consumers
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in one module each.
//! - Handlers write to a caller-supplied sink and return an exit code:
//!   0 on success, 1 on a failed check or lookup. Operational errors
//!   propagate as `anyhow::Error`.

pub mod check;
pub mod choices;
pub mod inspect;
pub mod lookup;

use std::path::Path;

use anyhow::{Context, Result};
use richenum_catalog::{Catalog, CatalogEnum, CatalogValue, OrderedCatalogValue};
use richenum_core::{Attribute, Member};
use serde::Serialize;
use serde_json::{json, Value};

/// How handlers render their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// One JSON document.
    Json,
}

/// Load a catalog, attaching the path to any error.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::from_path(path).with_context(|| format!("failed to load catalog {}", path.display()))
}

/// Find a named enum in a catalog.
pub fn find_enum<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a CatalogEnum> {
    catalog.get(name).with_context(|| {
        let known: Vec<&str> = catalog.names().collect();
        format!("no enum named {name:?} (catalog declares: {})", known.join(", "))
    })
}

/// JSON form of an attribute value.
pub fn attribute_to_json(attribute: &Attribute) -> Value {
    match attribute {
        Attribute::Text(s) => Value::String(s.clone()),
        Attribute::Integer(i) => json!(i),
        Attribute::Float(x) => json!(x),
        Attribute::Boolean(b) => Value::Bool(*b),
        Attribute::List(items) => Value::Array(items.iter().map(attribute_to_json).collect()),
    }
}

/// Names of the extra attributes a catalog member exposes.
pub fn attribute_names(member: &Member) -> Vec<String> {
    if let Some(value) = member.downcast_ref::<CatalogValue>() {
        value.attribute_names().map(str::to_string).collect()
    } else if let Some(value) = member.downcast_ref::<OrderedCatalogValue>() {
        value.attribute_names().map(str::to_string).collect()
    } else {
        Vec::new()
    }
}

/// Serializable view of one member.
#[derive(Debug, Serialize)]
pub struct MemberView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub canonical_name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub attributes: serde_json::Map<String, Value>,
}

impl MemberView {
    pub fn new(field: Option<&str>, member: &Member) -> Self {
        let attributes = attribute_names(member)
            .into_iter()
            .filter_map(|name| {
                let value = member.get(&name)?;
                Some((name, attribute_to_json(&value)))
            })
            .collect();
        Self {
            field: field.map(str::to_string),
            canonical_name: member.canonical_name().to_string(),
            display_name: member.to_display_string(),
            index: member.index(),
            attributes,
        }
    }
}

/// Parse a command-line value into an attribute: YAML scalars keep their
/// type (`2` is an integer, `true` a boolean), anything else is text.
/// Quote a value (`'"2"'`) to force text.
pub fn parse_attribute(raw: &str) -> Attribute {
    serde_yaml::from_str::<Value>(raw)
        .ok()
        .and_then(|value| richenum_catalog::attribute_from_json(&value).ok())
        .unwrap_or_else(|| Attribute::Text(raw.to_string()))
}
