//! CLI command handlers
//!
//! Each handler validates its input, drives the ledger facade, and persists
//! the snapshot immediately after any mutation.

pub mod account;
pub mod entry;
pub mod export;

pub use account::{handle_balances, handle_clear_account};
pub use entry::{
    handle_add, handle_archive, handle_delete, handle_list, handle_toggle, AddArgs, ListArgs,
};
pub use export::{handle_export, ExportArgs};

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
    })
}

/// Blocking confirmation prompt for destructive operations
pub(crate) fn confirm(prompt: &str) -> LedgerResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
