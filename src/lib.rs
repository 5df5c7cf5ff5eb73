//! ledger-cli - Personal finance ledger for a fixed set of accounts
//!
//! Tracks balances across a small, closed set of named accounts (Savings,
//! MGO, Fronted), records dated entries that move money between them, and
//! exports filtered history as CSV. Every recorded entry is exactly
//! reversible: deleting it restores all balances to the cent.
//!
//! # Architecture
//!
//! - `config`: path resolution for the snapshot file
//! - `error`: custom error types
//! - `models`: money, accounts, and entries
//! - `ledger`: the transaction engine, entry store, and mutation facade
//! - `report`: date filtering, balance replay, CSV export
//! - `storage`: versioned JSON snapshot with legacy migration
//! - `display`: terminal formatting
//! - `cli`: command handlers for the `ledger` binary

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod report;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
