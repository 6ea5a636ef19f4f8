//! CLI commands for data export

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use super::{create_output_file, resolve_date};
use crate::error::FinanceResult;
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    Csv,
    /// JSON format (full snapshot)
    Json,
    /// YAML format (full snapshot, human-readable)
    Yaml,
}

/// Arguments for `genz export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Date that goal day counts are computed against (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
}

/// Handle `genz export`
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> FinanceResult<()> {
    let today = resolve_date(args.today.as_deref())?;
    let mut writer = create_output_file(&args.output)?;

    match args.format {
        ExportFormat::Csv => {
            csv::export_transactions_csv(storage, &mut writer)?;
            println!("Transactions exported to: {}", args.output.display());
            println!(
                "Note: CSV format exports transactions only. Use JSON or YAML for everything."
            );
        }
        ExportFormat::Json => {
            json::export_full_json(storage, today, &mut writer, args.pretty)?;
            println!("Full snapshot exported to: {}", args.output.display());
        }
        ExportFormat::Yaml => {
            yaml::export_full_yaml(storage, today, &mut writer)?;
            println!("Full snapshot exported to: {}", args.output.display());
        }
    }

    info!(path = %args.output.display(), format = ?args.format, "export written");
    Ok(())
}
