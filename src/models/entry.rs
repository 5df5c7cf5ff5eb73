//! Ledger entry model
//!
//! An entry is one recorded money movement. Entries are immutable once
//! recorded except for the cleared flag, which is a display-only
//! reconciliation marker and never affects balances.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};

use super::account::Account;
use super::money::Money;

/// Unique identifier of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ent-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("ent-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The kind of money movement an entry records
///
/// Carrying the affected accounts inside each variant makes entries with a
/// missing source or destination unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Money entering the ledger; only the destination is affected
    Deposit { to: Account },
    /// Money leaving the ledger; only the source is affected
    Debit { from: Account },
    /// Money moving between two accounts
    Transfer { from: Account, to: Account },
}

impl EntryKind {
    /// Lowercase label used in the persisted snapshot and CSV export
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit { .. } => "deposit",
            Self::Debit { .. } => "debit",
            Self::Transfer { .. } => "transfer",
        }
    }

    /// The source account, if this kind has one
    pub fn from_account(&self) -> Option<Account> {
        match self {
            Self::Deposit { .. } => None,
            Self::Debit { from } | Self::Transfer { from, .. } => Some(*from),
        }
    }

    /// The destination account, if this kind has one
    pub fn to_account(&self) -> Option<Account> {
        match self {
            Self::Debit { .. } => None,
            Self::Deposit { to } | Self::Transfer { to, .. } => Some(*to),
        }
    }
}

/// One recorded money movement
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Unique identifier, assigned at creation
    pub id: EntryId,

    /// Calendar date of the movement
    pub date: NaiveDate,

    /// What kind of movement this is and which accounts it touches
    pub kind: EntryKind,

    /// Positive amount moved
    pub amount: Money,

    /// Free-text annotation
    pub note: String,

    /// Reconciliation marker; display-only, no balance effect
    pub cleared: bool,
}

impl Entry {
    /// Flip the cleared flag, returning the new value
    pub fn toggle_cleared(&mut self) -> bool {
        self.cleared = !self.cleared;
        self.cleared
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.kind.label(),
            self.amount
        )
    }
}

/// Plain tag naming an entry kind before accounts are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Deposit,
    Debit,
    Transfer,
}

/// Unvalidated input for a new entry
///
/// Collected by the presentation layer and turned into an [`Entry`] by
/// [`EntryRequest::build`], which performs all validation. A built entry can
/// always be applied and reversed without failure.
#[derive(Debug, Clone)]
pub struct EntryRequest {
    pub kind: RequestKind,
    pub from: Option<Account>,
    pub to: Option<Account>,
    pub amount: Money,
    pub note: String,
    /// Defaults to today when unspecified
    pub date: Option<NaiveDate>,
}

impl EntryRequest {
    /// Validate the request and mint an entry
    pub fn build(self) -> LedgerResult<Entry> {
        if !self.amount.is_positive() {
            return Err(LedgerError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }

        if self.note.trim().is_empty() {
            return Err(LedgerError::Validation("Note must not be empty".into()));
        }

        let kind = match self.kind {
            RequestKind::Deposit => EntryKind::Deposit {
                to: self.to.ok_or_else(|| {
                    LedgerError::Validation("Deposit requires a destination account".into())
                })?,
            },
            RequestKind::Debit => EntryKind::Debit {
                from: self.from.ok_or_else(|| {
                    LedgerError::Validation("Debit requires a source account".into())
                })?,
            },
            RequestKind::Transfer => {
                let from = self.from.ok_or_else(|| {
                    LedgerError::Validation("Transfer requires a source account".into())
                })?;
                let to = self.to.ok_or_else(|| {
                    LedgerError::Validation("Transfer requires a destination account".into())
                })?;
                if from == to {
                    return Err(LedgerError::Validation(
                        "Cannot transfer to the same account".into(),
                    ));
                }
                EntryKind::Transfer { from, to }
            }
        };

        Ok(Entry {
            id: EntryId::new(),
            date: self.date.unwrap_or_else(|| Utc::now().date_naive()),
            kind,
            amount: self.amount,
            note: self.note,
            cleared: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: RequestKind, from: Option<Account>, to: Option<Account>) -> EntryRequest {
        EntryRequest {
            kind,
            from,
            to,
            amount: Money::from_cents(10000),
            note: "rent".into(),
            date: Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
        }
    }

    #[test]
    fn test_build_deposit() {
        let entry = request(RequestKind::Deposit, None, Some(Account::Savings))
            .build()
            .unwrap();
        assert_eq!(entry.kind, EntryKind::Deposit { to: Account::Savings });
        assert_eq!(entry.kind.label(), "deposit");
        assert_eq!(entry.kind.from_account(), None);
        assert_eq!(entry.kind.to_account(), Some(Account::Savings));
        assert!(!entry.cleared);
    }

    #[test]
    fn test_build_transfer() {
        let entry = request(
            RequestKind::Transfer,
            Some(Account::Savings),
            Some(Account::Mgo),
        )
        .build()
        .unwrap();
        assert_eq!(entry.kind.from_account(), Some(Account::Savings));
        assert_eq!(entry.kind.to_account(), Some(Account::Mgo));
    }

    #[test]
    fn test_build_rejects_zero_amount() {
        let mut req = request(RequestKind::Deposit, None, Some(Account::Savings));
        req.amount = Money::zero();
        assert!(req.build().unwrap_err().is_validation());
    }

    #[test]
    fn test_build_rejects_negative_amount() {
        let mut req = request(RequestKind::Debit, Some(Account::Savings), None);
        req.amount = Money::from_cents(-100);
        assert!(req.build().unwrap_err().is_validation());
    }

    #[test]
    fn test_build_rejects_blank_note() {
        let mut req = request(RequestKind::Deposit, None, Some(Account::Savings));
        req.note = "   ".into();
        assert!(req.build().unwrap_err().is_validation());
    }

    #[test]
    fn test_build_rejects_missing_accounts() {
        assert!(request(RequestKind::Deposit, Some(Account::Savings), None)
            .build()
            .is_err());
        assert!(request(RequestKind::Debit, None, Some(Account::Savings))
            .build()
            .is_err());
        assert!(request(RequestKind::Transfer, Some(Account::Savings), None)
            .build()
            .is_err());
    }

    #[test]
    fn test_build_rejects_self_transfer() {
        let err = request(
            RequestKind::Transfer,
            Some(Account::Mgo),
            Some(Account::Mgo),
        )
        .build()
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_build_defaults_date_to_today() {
        let mut req = request(RequestKind::Deposit, None, Some(Account::Savings));
        req.date = None;
        let entry = req.build().unwrap();
        assert_eq!(entry.date, Utc::now().date_naive());
    }

    #[test]
    fn test_toggle_cleared_is_idempotent_over_two_flips() {
        let mut entry = request(RequestKind::Deposit, None, Some(Account::Savings))
            .build()
            .unwrap();
        assert!(entry.toggle_cleared());
        assert!(!entry.toggle_cleared());
        assert!(!entry.cleared);
    }

    #[test]
    fn test_entry_id_roundtrip() {
        let id = EntryId::new();
        let display = id.to_string();
        assert!(display.starts_with("ent-"));
        assert_eq!(display.len(), 12);

        let parsed: EntryId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
