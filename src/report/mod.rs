//! Reporting over the entry history
//!
//! Filters entries by date range and replays balances from zero for audit
//! and export. Replay always folds over a fresh accumulator; the live
//! registry is never touched, so reporting is side-effect-free.

pub mod csv;

pub use csv::{export_csv, DEFAULT_EXPORT_FILENAME};

use chrono::NaiveDate;

use crate::ledger::engine;
use crate::models::{Balances, Entry};

/// Entries whose date falls within the inclusive range
///
/// A missing bound leaves that side unbounded.
pub fn filter_by_date_range(
    entries: &[Entry],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| from.map_or(true, |d| e.date >= d) && to.map_or(true, |d| e.date <= d))
        .cloned()
        .collect()
}

/// One replayed entry together with the running balances after it
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayRow {
    pub entry: Entry,
    /// Balances after this entry, starting from a zero baseline
    pub after: Balances,
}

/// Replay balances forward over entries already sorted ascending by date
///
/// The accumulator starts at zero and is threaded explicitly through the
/// fold; nothing persists between invocations.
pub fn replay(entries_ascending: &[Entry]) -> Vec<ReplayRow> {
    let mut running = Balances::zero();
    entries_ascending
        .iter()
        .map(|entry| {
            engine::apply(&mut running, entry);
            ReplayRow {
                entry: entry.clone(),
                after: running,
            }
        })
        .collect()
}
