//! Core data models
//!
//! The building blocks of the ledger: exact money amounts, the fixed account
//! registry, and recorded entries.

pub mod account;
pub mod entry;
pub mod money;

pub use account::{Account, Balances};
pub use entry::{Entry, EntryId, EntryKind, EntryRequest, RequestKind};
pub use money::Money;
