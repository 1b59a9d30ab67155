//! # Lookup Subcommand
//!
//! Finds one member of one enum. Exactly one query is given:
//! `--canonical`, `--display`, `--index`, or `--field` with `--value`.
//! A query that matches nothing exits with code 1.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgGroup, Args};
use richenum_core::{LookupError, Member};

use crate::{find_enum, load_catalog, parse_attribute, MemberView, OutputFormat};

/// Arguments for `richenum lookup`.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("query")
        .required(true)
        .args(["canonical", "display", "index", "field"]),
))]
pub struct LookupArgs {
    /// Catalog file to read.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Enum to search.
    #[arg(value_name = "ENUM")]
    pub enum_name: String,

    /// Match the canonical name.
    #[arg(long)]
    pub canonical: Option<String>,

    /// Match the rendered display name.
    #[arg(long)]
    pub display: Option<String>,

    /// Match the index (ordered enums only).
    #[arg(long)]
    pub index: Option<usize>,

    /// Match an arbitrary attribute; requires `--value`.
    #[arg(long, requires = "value")]
    pub field: Option<String>,

    /// Value for `--field`. YAML scalars keep their type.
    #[arg(long, requires = "field")]
    pub value: Option<String>,
}

/// Execute `richenum lookup`.
pub fn run_lookup(args: &LookupArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let catalog = load_catalog(&args.catalog)?;
    let declared = find_enum(&catalog, &args.enum_name)?;
    let rich = declared.as_rich();

    let found: Result<&Member, LookupError> = if let Some(canonical) = &args.canonical {
        rich.from_canonical(canonical)
    } else if let Some(display) = &args.display {
        rich.from_display(display)
    } else if let Some(index) = args.index {
        match declared.as_ordered() {
            Some(ordered) => ordered.from_index(index),
            None => bail!("enum {} is not ordered; --index is unavailable", rich.name()),
        }
    } else if let (Some(field), Some(value)) = (&args.field, &args.value) {
        rich.lookup(field, parse_attribute(value))
    } else {
        bail!("no lookup query given");
    };

    match found {
        Ok(member) => {
            let field = rich
                .entries()
                .find(|(_, m)| Member::ptr_eq(m, member))
                .map(|(field, _)| field);
            match format {
                OutputFormat::Json => {
                    let view = MemberView::new(field, member);
                    writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
                }
                OutputFormat::Text => match field {
                    Some(field) => writeln!(out, "{field} = {member:?}")?,
                    None => writeln!(out, "{member:?}")?,
                },
            }
            Ok(0)
        }
        Err(err) => {
            tracing::debug!(enum_id = %err.enum_id(), "lookup failed");
            match format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "enum": err.enum_name(),
                        "field": err.field(),
                        "value": crate::attribute_to_json(err.value()),
                        "error": err.to_string(),
                    });
                    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
                }
                OutputFormat::Text => writeln!(out, "NOT FOUND: {err}")?,
            }
            Ok(1)
        }
    }
}
