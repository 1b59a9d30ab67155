//! # Choices Subcommand
//!
//! Prints `(value, display)` pairs in stored order, the shape legacy form
//! libraries expect.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use richenum_core::{CANONICAL_NAME, DISPLAY_NAME};

use crate::{attribute_to_json, find_enum, load_catalog, OutputFormat};

/// Arguments for `richenum choices`.
#[derive(Args, Debug)]
pub struct ChoicesArgs {
    /// Catalog file to read.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Enum to list.
    #[arg(value_name = "ENUM")]
    pub enum_name: String,

    /// Attribute used as the choice value.
    #[arg(long, default_value = CANONICAL_NAME)]
    pub value_field: String,

    /// Attribute used as the choice label.
    #[arg(long, default_value = DISPLAY_NAME)]
    pub display_field: String,
}

/// Execute `richenum choices`.
#[allow(deprecated)]
pub fn run_choices(args: &ChoicesArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let catalog = load_catalog(&args.catalog)?;
    let rich = find_enum(&catalog, &args.enum_name)?.as_rich();
    let choices = rich
        .choices(&args.value_field, &args.display_field)
        .with_context(|| format!("cannot build choices for enum {}", rich.name()))?;

    match format {
        OutputFormat::Json => {
            let pairs: Vec<serde_json::Value> = choices
                .iter()
                .map(|(value, display)| serde_json::json!([attribute_to_json(value), attribute_to_json(display)]))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&pairs)?)?;
        }
        OutputFormat::Text => {
            for (value, display) in &choices {
                writeln!(out, "{value}\t{display}")?;
            }
        }
    }
    Ok(0)
}
