//! CLI command for CSV export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::report::{export_csv, filter_by_date_range, DEFAULT_EXPORT_FILENAME};

use super::parse_date;

/// Arguments for `ledger export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_EXPORT_FILENAME)]
    pub output: PathBuf,

    /// Only export entries on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from_date: Option<String>,

    /// Only export entries on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to_date: Option<String>,

    /// Append running-balance columns to each row
    #[arg(long)]
    pub balances: bool,
}

/// Export filtered history as CSV, ascending by date
pub fn handle_export(ledger: &Ledger, args: ExportArgs) -> LedgerResult<()> {
    let from = args.from_date.as_deref().map(parse_date).transpose()?;
    let to = args.to_date.as_deref().map(parse_date).transpose()?;

    let entries = filter_by_date_range(ledger.store().entries(), from, to);

    let file = File::create(&args.output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    export_csv(&entries, &mut writer, args.balances)?;

    println!(
        "Exported {} entries to: {}",
        entries.len(),
        args.output.display()
    );
    Ok(())
}
