//! CLI commands for account balances

use crate::display::format_balances;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::Account;
use crate::storage::SnapshotStore;

use super::confirm;

/// Show current balances
pub fn handle_balances(ledger: &Ledger) -> LedgerResult<()> {
    print!("{}", format_balances(ledger.balances()));
    Ok(())
}

/// Zero out one account without touching the entry history
pub fn handle_clear_account(
    ledger: &mut Ledger,
    store: &SnapshotStore,
    account: &str,
    yes: bool,
) -> LedgerResult<()> {
    let account = Account::parse(account)?;

    if !yes {
        let prompt = format!(
            "Clear {} (currently {})?",
            account,
            ledger.balances().balance_of(account)
        );
        if !confirm(&prompt)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let old = ledger.clear_account(account);
    store.save(ledger)?;

    println!("Cleared {} (was {})", account, old);
    Ok(())
}
