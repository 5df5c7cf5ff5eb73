//! Ledger state and mutation facade
//!
//! A [`Ledger`] owns the account balances and the entry history and funnels
//! every mutation through `record`/`delete_entry`/`toggle_cleared`. There is
//! no ambient global state; callers hold the one ledger value and persist it
//! after each mutating operation.

pub mod engine;
pub mod store;

pub use store::EntryStore;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Balances, Entry, EntryId, EntryRequest, Money};

/// The complete in-memory ledger state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    balances: Balances,
    store: EntryStore,
}

impl Ledger {
    /// An empty ledger: all balances zero, no entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassemble a ledger from persisted state
    pub fn from_parts(balances: Balances, entries: Vec<Entry>) -> Self {
        Self {
            balances,
            store: EntryStore::from_entries(entries),
        }
    }

    /// Validate a request, apply its balance effect, and record the entry
    pub fn record(&mut self, request: EntryRequest) -> LedgerResult<Entry> {
        let entry = request.build()?;
        engine::apply(&mut self.balances, &entry);
        self.store.add(entry.clone());
        Ok(entry)
    }

    /// Reverse an entry's balance effect and remove it from the history
    ///
    /// The reversal and the removal are bundled so callers cannot perform
    /// one without the other.
    pub fn delete_entry(&mut self, id: EntryId) -> LedgerResult<Entry> {
        let entry = self
            .store
            .remove(id)
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;
        engine::reverse(&mut self.balances, &entry);
        Ok(entry)
    }

    /// Flip an entry's cleared flag, returning the new value
    pub fn toggle_cleared(&mut self, id: EntryId) -> LedgerResult<bool> {
        self.store
            .toggle_cleared(id)
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))
    }

    /// Zero out one account without touching the entry history
    ///
    /// Returns the balance that was discarded.
    pub fn clear_account(&mut self, account: Account) -> Money {
        self.balances.reset(account)
    }

    /// Discard the entire entry history without reversing balances
    ///
    /// This deliberately breaks replay equivalence: the entries are gone but
    /// the balances they produced remain.
    pub fn archive(&mut self) -> usize {
        self.store.clear()
    }

    /// Current account balances
    pub fn balances(&self) -> &Balances {
        &self.balances
    }

    /// The entry history
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Entries in on-screen history order (newest date first)
    pub fn history(&self) -> Vec<Entry> {
        self.store.by_date_desc()
    }

    /// Resolve a user-supplied identifier string to an entry ID
    pub fn resolve_id(&self, needle: &str) -> LedgerResult<EntryId> {
        self.store.resolve_id(needle)
    }

    /// Recompute balances from zero by folding every recorded entry
    ///
    /// Works on a copy; the live balances are never touched. Equal to
    /// [`Ledger::balances`] as long as no archive or clear-account has
    /// occurred.
    pub fn replay_from_zero(&self) -> Balances {
        self.store
            .by_date_asc()
            .iter()
            .fold(Balances::zero(), |mut acc, entry| {
                engine::apply(&mut acc, entry);
                acc
            })
    }
}
