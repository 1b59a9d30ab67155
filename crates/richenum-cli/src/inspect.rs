//! # Inspect Subcommand
//!
//! Lists the enums of a catalog with their members in stored order.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use richenum_catalog::CatalogEnum;
use serde::Serialize;

use crate::{find_enum, load_catalog, MemberView, OutputFormat};

/// Arguments for `richenum inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Catalog file to read.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Only show this enum.
    #[arg(value_name = "ENUM")]
    pub enum_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct EnumView {
    name: String,
    kind: &'static str,
    #[serde(rename = "virtual")]
    is_virtual: bool,
    members: Vec<MemberView>,
}

impl EnumView {
    fn new(declared: &CatalogEnum) -> Self {
        let rich = declared.as_rich();
        Self {
            name: rich.name().to_string(),
            kind: rich.kind(),
            is_virtual: rich.is_virtual(),
            members: rich
                .entries()
                .map(|(field, member)| MemberView::new(Some(field), member))
                .collect(),
        }
    }
}

/// Execute `richenum inspect`.
pub fn run_inspect(args: &InspectArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let catalog = load_catalog(&args.catalog)?;
    let selected: Vec<&CatalogEnum> = match &args.enum_name {
        Some(name) => vec![find_enum(&catalog, name)?],
        None => catalog.iter().collect(),
    };

    match format {
        OutputFormat::Json => {
            let views: Vec<EnumView> = selected.into_iter().map(EnumView::new).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&views)?)?;
        }
        OutputFormat::Text => {
            for declared in selected {
                let rich = declared.as_rich();
                writeln!(out, "{} ({}, {} member(s))", rich.name(), rich.kind(), rich.len())?;
                for (field, member) in rich.entries() {
                    writeln!(out, "  {field} = {member:?}")?;
                }
            }
        }
    }
    Ok(0)
}
