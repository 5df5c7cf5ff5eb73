//! Entry store
//!
//! Ordered collection of recorded entries, keyed by identifier. Insertion
//! order is not semantically meaningful; callers ask for a date ordering.
//!
//! Removing an entry does not reverse its balance effect. Go through
//! [`Ledger::delete_entry`](super::Ledger::delete_entry), which bundles the
//! reversal with the removal so the two cannot be separated.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, EntryId};

/// The recorded entry history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from already-recorded entries (snapshot load)
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Append a recorded entry
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove an entry, returning it if present
    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Look up an entry
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Flip an entry's cleared flag, returning the new value
    pub fn toggle_cleared(&mut self, id: EntryId) -> Option<bool> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(Entry::toggle_cleared)
    }

    /// All entries in storage order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries sorted ascending by date (report/export order)
    pub fn by_date_asc(&self) -> Vec<Entry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        entries
    }

    /// Entries sorted descending by date (on-screen history order)
    pub fn by_date_desc(&self) -> Vec<Entry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Discard all entries, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a user-supplied identifier string to an entry ID
    ///
    /// Accepts a full UUID or the short `ent-xxxxxxxx` form shown in the
    /// history listing. A short form must match exactly one entry.
    pub fn resolve_id(&self, needle: &str) -> LedgerResult<EntryId> {
        if let Ok(id) = needle.parse::<EntryId>() {
            return if self.get(id).is_some() {
                Ok(id)
            } else {
                Err(LedgerError::entry_not_found(needle))
            };
        }

        let short = needle.strip_prefix("ent-").unwrap_or(needle).to_lowercase();
        if short.is_empty() {
            return Err(LedgerError::entry_not_found(needle));
        }

        let matches: Vec<EntryId> = self
            .entries
            .iter()
            .filter(|e| e.id.as_uuid().to_string().starts_with(&short))
            .map(|e| e.id)
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(LedgerError::entry_not_found(needle)),
            _ => Err(LedgerError::Validation(format!(
                "Identifier '{}' matches more than one entry",
                needle
            ))),
        }
    }
}
