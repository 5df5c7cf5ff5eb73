//! CSV export
//!
//! Writes filtered entry history as comma-separated rows, ascending by date,
//! optionally extended with the running balance of each account after every
//! row. An export with no entries in range produces the header line only.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Entry;

use super::replay;

/// Default filename for exports
pub const DEFAULT_EXPORT_FILENAME: &str = "ledger-export.csv";

const HEADER: &str = "Date,Type,From,To,Amount,Note,Cleared";
const BALANCE_HEADER: &str = "Savings After,MGO After,Fronted After";

/// Write entries as CSV
///
/// Input order does not matter; rows are always emitted ascending by date.
/// With `with_balances` set, three running-balance columns are appended,
/// replayed from a zero baseline over the exported rows.
pub fn export_csv<W: Write>(
    entries: &[Entry],
    writer: &mut W,
    with_balances: bool,
) -> LedgerResult<()> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let header = if with_balances {
        format!("{},{}", HEADER, BALANCE_HEADER)
    } else {
        HEADER.to_string()
    };
    writeln!(writer, "{}", header).map_err(|e| LedgerError::Export(e.to_string()))?;

    for row in replay(&sorted) {
        let entry = &row.entry;
        let mut line = format!(
            "{},{},{},{},{},{},{}",
            entry.date.format("%Y-%m-%d"),
            entry.kind.label(),
            entry
                .kind
                .from_account()
                .map(|a| a.to_string())
                .unwrap_or_default(),
            entry
                .kind
                .to_account()
                .map(|a| a.to_string())
                .unwrap_or_default(),
            entry.amount.to_decimal_string(),
            quote(&entry.note),
            entry.cleared,
        );

        if with_balances {
            line.push_str(&format!(
                ",{},{},{}",
                row.after.savings.to_decimal_string(),
                row.after.mgo.to_decimal_string(),
                row.after.fronted.to_decimal_string(),
            ));
        }

        writeln!(writer, "{}", line).map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Quote a free-text field, doubling any embedded quotes
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
