//! CLI commands for recording and managing entries

use clap::{Args, ValueEnum};

use crate::display::format_history;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Account, EntryRequest, Money, RequestKind};
use crate::report::filter_by_date_range;
use crate::storage::SnapshotStore;

use super::{confirm, parse_date};

/// Entry kind as accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Money entering the ledger (requires --to)
    Deposit,
    /// Money leaving the ledger (requires --from)
    Debit,
    /// Money moving between accounts (requires --from and --to)
    Transfer,
}

impl From<KindArg> for RequestKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Deposit => RequestKind::Deposit,
            KindArg::Debit => RequestKind::Debit,
            KindArg::Transfer => RequestKind::Transfer,
        }
    }
}

/// Arguments for `ledger add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Kind of movement
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Amount, e.g. "42.50"
    pub amount: String,

    /// Source account (debit and transfer)
    #[arg(long)]
    pub from: Option<String>,

    /// Destination account (deposit and transfer)
    #[arg(long)]
    pub to: Option<String>,

    /// Note describing the movement
    #[arg(short, long)]
    pub note: String,

    /// Entry date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `ledger list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show entries on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from_date: Option<String>,

    /// Only show entries on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to_date: Option<String>,
}

/// Record a new entry
pub fn handle_add(ledger: &mut Ledger, store: &SnapshotStore, args: AddArgs) -> LedgerResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| LedgerError::Validation(e.to_string()))?;
    let from = args.from.as_deref().map(Account::parse).transpose()?;
    let to = args.to.as_deref().map(Account::parse).transpose()?;
    let date = args.date.as_deref().map(parse_date).transpose()?;

    let entry = ledger.record(EntryRequest {
        kind: args.kind.into(),
        from,
        to,
        amount,
        note: args.note,
        date,
    })?;
    store.save(ledger)?;

    println!(
        "Recorded {} of {} on {} ({})",
        entry.kind.label(),
        entry.amount,
        entry.date,
        entry.id
    );
    Ok(())
}

/// Show entry history, newest first
pub fn handle_list(ledger: &Ledger, args: ListArgs) -> LedgerResult<()> {
    let from = args.from_date.as_deref().map(parse_date).transpose()?;
    let to = args.to_date.as_deref().map(parse_date).transpose()?;

    let mut entries = filter_by_date_range(ledger.store().entries(), from, to);
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    print!("{}", format_history(&entries));
    Ok(())
}

/// Delete an entry, reversing its balance effect
pub fn handle_delete(
    ledger: &mut Ledger,
    store: &SnapshotStore,
    id: &str,
    yes: bool,
) -> LedgerResult<()> {
    let entry_id = ledger.resolve_id(id)?;

    if !yes {
        let prompt = format!(
            "Delete entry {} and reverse its balance effect?",
            entry_id
        );
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let entry = ledger.delete_entry(entry_id)?;
    store.save(ledger)?;

    println!(
        "Deleted {} of {} ({}); balances reversed",
        entry.kind.label(),
        entry.amount,
        entry.id
    );
    Ok(())
}

/// Toggle an entry's cleared flag
pub fn handle_toggle(ledger: &mut Ledger, store: &SnapshotStore, id: &str) -> LedgerResult<()> {
    let entry_id = ledger.resolve_id(id)?;
    let cleared = ledger.toggle_cleared(entry_id)?;
    store.save(ledger)?;

    println!(
        "Entry {} is now {}",
        entry_id,
        if cleared { "cleared" } else { "uncleared" }
    );
    Ok(())
}

/// Discard the entire entry history, keeping balances
pub fn handle_archive(ledger: &mut Ledger, store: &SnapshotStore, yes: bool) -> LedgerResult<()> {
    if ledger.store().is_empty() {
        println!("Nothing to archive.");
        return Ok(());
    }

    if !yes {
        let prompt = format!(
            "Archive all {} entries? Balances are kept as they are",
            ledger.store().len()
        );
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let count = ledger.archive();
    store.save(ledger)?;

    println!("Archived {} entries; balances unchanged", count);
    Ok(())
}
