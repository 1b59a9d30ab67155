//! # Check Subcommand
//!
//! Loads a catalog and reports whether every enum in it is valid. A
//! catalog that fails to load is a check failure (exit code 1), not an
//! operational error.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use richenum_catalog::Catalog;
use serde::Serialize;

use crate::OutputFormat;

/// Arguments for `richenum check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Catalog file to check.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Debug, Serialize)]
struct EnumSummary<'a> {
    name: &'a str,
    kind: &'static str,
    #[serde(rename = "virtual")]
    is_virtual: bool,
    members: usize,
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    path: String,
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    enums: Vec<EnumSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute `richenum check`.
pub fn run_check(args: &CheckArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let path = args.catalog.display().to_string();
    let loaded = Catalog::from_path(&args.catalog);

    let report = match &loaded {
        Ok(catalog) => CheckReport {
            path,
            valid: true,
            enums: catalog
                .iter()
                .map(|e| {
                    let rich = e.as_rich();
                    EnumSummary {
                        name: rich.name(),
                        kind: rich.kind(),
                        is_virtual: rich.is_virtual(),
                        members: rich.len(),
                    }
                })
                .collect(),
            error: None,
        },
        Err(e) => {
            tracing::info!(path = %path, "catalog check failed");
            CheckReport {
                path,
                valid: false,
                enums: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    };

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => {
            if let Some(error) = &report.error {
                writeln!(out, "FAIL: {}", report.path)?;
                writeln!(out, "{error}")?;
            } else {
                for summary in &report.enums {
                    let virtual_note = if summary.is_virtual { ", virtual" } else { "" };
                    writeln!(
                        out,
                        "  {} ({}{}): {} member(s)",
                        summary.name, summary.kind, virtual_note, summary.members
                    )?;
                }
                writeln!(out, "OK: {} ({} enum(s))", report.path, report.enums.len())?;
            }
        }
    }

    Ok(if report.valid { 0 } else { 1 })
}
