//! Transaction engine
//!
//! Applies an entry's balance effect to the account registry and computes
//! the exact algebraic inverse. The central correctness property is the
//! round-trip law: applying an entry and then reversing it leaves every
//! balance unchanged, cent for cent.
//!
//! Entries are validated at construction, so both operations here are total.

use crate::models::{Balances, Entry, EntryKind};

/// Apply an entry's balance deltas to the registry
pub fn apply(balances: &mut Balances, entry: &Entry) {
    match entry.kind {
        EntryKind::Deposit { to } => {
            balances.apply_delta(to, entry.amount);
        }
        EntryKind::Debit { from } => {
            balances.apply_delta(from, -entry.amount);
        }
        EntryKind::Transfer { from, to } => {
            balances.apply_delta(from, -entry.amount);
            balances.apply_delta(to, entry.amount);
        }
    }
}

/// Undo an entry's balance deltas
pub fn reverse(balances: &mut Balances, entry: &Entry) {
    match entry.kind {
        EntryKind::Deposit { to } => {
            balances.apply_delta(to, -entry.amount);
        }
        EntryKind::Debit { from } => {
            balances.apply_delta(from, entry.amount);
        }
        EntryKind::Transfer { from, to } => {
            balances.apply_delta(from, entry.amount);
            balances.apply_delta(to, -entry.amount);
        }
    }
}
