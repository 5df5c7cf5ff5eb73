//! Versioned snapshot schema
//!
//! Two on-disk shapes exist. Schema v2 is what this crate writes: three
//! typed account balances in cents and typed entries. Schema v1 is the
//! legacy shape from the original untyped app: four dollar-valued balances
//! (including a Checking account later renamed to Fronted) and entries with
//! no kind or cleared flag. v1 snapshots are migrated on load; nothing is
//! merged silently.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Account, Balances, Entry, EntryId, EntryKind, Money};

/// Schema version written by this crate
pub const SCHEMA_VERSION: u32 = 2;

/// Current on-disk snapshot shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotV2 {
    pub schema_version: u32,
    #[serde(flatten)]
    pub balances: Balances,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

/// Persisted form of one entry (schema v2)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub amount: Money,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub cleared: bool,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            id: *entry.id.as_uuid(),
            date: entry.date,
            kind: entry.kind.label().to_string(),
            from: entry.kind.from_account().map(|a| a.to_string()),
            to: entry.kind.to_account().map(|a| a.to_string()),
            amount: entry.amount,
            note: entry.note.clone(),
            cleared: entry.cleared,
        }
    }
}

impl TryFrom<EntryRecord> for Entry {
    type Error = LedgerError;

    fn try_from(record: EntryRecord) -> LedgerResult<Self> {
        let from = record.from.as_deref().map(Account::parse).transpose()?;
        let to = record.to.as_deref().map(Account::parse).transpose()?;

        let kind = match record.kind.as_str() {
            "deposit" => EntryKind::Deposit {
                to: to.ok_or_else(|| missing_account(&record, "destination"))?,
            },
            "debit" => EntryKind::Debit {
                from: from.ok_or_else(|| missing_account(&record, "source"))?,
            },
            "transfer" => EntryKind::Transfer {
                from: from.ok_or_else(|| missing_account(&record, "source"))?,
                to: to.ok_or_else(|| missing_account(&record, "destination"))?,
            },
            other => {
                return Err(LedgerError::Migration(format!(
                    "Entry {} has unknown kind '{}'",
                    record.id, other
                )))
            }
        };

        Ok(Entry {
            id: EntryId::from_uuid(record.id),
            date: record.date,
            kind,
            amount: record.amount,
            note: record.note,
            cleared: record.cleared,
        })
    }
}

fn missing_account(record: &EntryRecord, side: &str) -> LedgerError {
    LedgerError::Migration(format!(
        "Entry {} ({}) is missing its {} account",
        record.id, record.kind, side
    ))
}

/// Legacy snapshot shape from the original app (schema v1)
///
/// Balances and amounts were stored as floating dollar values; this is the
/// one place floats are allowed to exist, and they are converted to cents
/// immediately.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotV1 {
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub mgo: f64,
    #[serde(default)]
    pub checking: f64,
    #[serde(default)]
    pub fronted: f64,
    #[serde(default)]
    pub entries: Vec<EntryRecordV1>,
}

/// Persisted form of one entry in schema v1: untyped, no cleared flag
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecordV1 {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub note: String,
}

/// Decode a raw snapshot value, migrating legacy shapes as needed
///
/// Missing fields fall back to the in-memory defaults (zero balances, no
/// entries), matching a shallow merge onto a default state.
pub fn decode(value: serde_json::Value) -> LedgerResult<Ledger> {
    let version = value
        .get("schema_version")
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(1);

    match version {
        1 => {
            let v1: SnapshotV1 = serde_json::from_value(value)?;
            migrate_v1(v1)
        }
        2 => {
            let v2: SnapshotV2 = serde_json::from_value(value)?;
            let entries = v2
                .entries
                .into_iter()
                .map(Entry::try_from)
                .collect::<LedgerResult<Vec<_>>>()?;
            Ok(Ledger::from_parts(v2.balances, entries))
        }
        other => Err(LedgerError::Migration(format!(
            "Unsupported snapshot schema version {}",
            other
        ))),
    }
}

/// Encode live ledger state as the current snapshot shape
pub fn encode(ledger: &Ledger) -> SnapshotV2 {
    SnapshotV2 {
        schema_version: SCHEMA_VERSION,
        balances: *ledger.balances(),
        entries: ledger.store().entries().iter().map(EntryRecord::from).collect(),
    }
}

/// Migrate a v1 snapshot to the current model
///
/// The Checking slot was renamed to Fronted in the later schema: its balance
/// folds into Fronted and entry references to Checking are remapped. Untyped
/// entries become transfers when both accounts are present, debits with only
/// a source, deposits with only a destination.
fn migrate_v1(v1: SnapshotV1) -> LedgerResult<Ledger> {
    let mut balances = Balances::zero();
    balances.savings = cents_from_dollars(v1.savings);
    balances.mgo = cents_from_dollars(v1.mgo);
    balances.fronted = cents_from_dollars(v1.fronted) + cents_from_dollars(v1.checking);

    let entries = v1
        .entries
        .into_iter()
        .map(migrate_v1_entry)
        .collect::<LedgerResult<Vec<_>>>()?;

    Ok(Ledger::from_parts(balances, entries))
}

fn migrate_v1_entry(record: EntryRecordV1) -> LedgerResult<Entry> {
    let from = parse_v1_account(record.from.as_deref())?;
    let to = parse_v1_account(record.to.as_deref())?;

    let kind = match (from, to) {
        (Some(from), Some(to)) => EntryKind::Transfer { from, to },
        (Some(from), None) => EntryKind::Debit { from },
        (None, Some(to)) => EntryKind::Deposit { to },
        (None, None) => {
            return Err(LedgerError::Migration(format!(
                "Entry {} references no account",
                record.id
            )))
        }
    };

    Ok(Entry {
        id: EntryId::from_uuid(record.id),
        date: record.date,
        kind,
        amount: cents_from_dollars(record.amount),
        note: record.note,
        cleared: false,
    })
}

/// Parse a v1 account name; Checking maps to its successor Fronted
fn parse_v1_account(name: Option<&str>) -> LedgerResult<Option<Account>> {
    match name.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("checking") => Ok(Some(Account::Fronted)),
        Some(s) => Account::parse(s).map(Some),
    }
}

fn cents_from_dollars(dollars: f64) -> Money {
    Money::from_cents((dollars * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_v2_round_trip() {
        let mut ledger = Ledger::new();
        ledger
            .record(crate::models::EntryRequest {
                kind: crate::models::RequestKind::Transfer,
                from: Some(Account::Savings),
                to: Some(Account::Mgo),
                amount: Money::from_cents(6000),
                note: "move".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 3),
            })
            .unwrap();

        let snapshot = encode(&ledger);
        assert_eq!(snapshot.schema_version, SCHEMA_VERSION);

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["schema_version"], 2);
        assert_eq!(value["entries"][0]["kind"], "transfer");
        assert_eq!(value["entries"][0]["from"], "Savings");
        assert_eq!(value["entries"][0]["to"], "MGO");

        let restored = decode(value).unwrap();
        assert_eq!(restored, ledger);
    }

    #[test]
    fn test_v2_deposit_record_omits_from() {
        let record = EntryRecord {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            kind: "deposit".into(),
            from: None,
            to: Some("Savings".into()),
            amount: Money::from_cents(100),
            note: "pay".into(),
            cleared: true,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("from").is_none());

        let entry = Entry::try_from(record).unwrap();
        assert_eq!(entry.kind, EntryKind::Deposit { to: Account::Savings });
        assert!(entry.cleared);
    }

    #[test]
    fn test_v2_unknown_account_fails_load() {
        let value = json!({
            "schema_version": 2,
            "savings": 0, "mgo": 0, "fronted": 0,
            "entries": [{
                "id": Uuid::new_v4(),
                "date": "2024-01-01",
                "kind": "deposit",
                "to": "Checking",
                "amount": 100,
                "note": "x"
            }]
        });

        let err = decode(value).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAccount(_)));
    }

    #[test]
    fn test_v2_unknown_kind_fails_load() {
        let value = json!({
            "schema_version": 2,
            "savings": 0, "mgo": 0, "fronted": 0,
            "entries": [{
                "id": Uuid::new_v4(),
                "date": "2024-01-01",
                "kind": "withdrawal",
                "from": "Savings",
                "amount": 100,
                "note": "x"
            }]
        });

        assert!(matches!(
            decode(value),
            Err(LedgerError::Migration(_))
        ));
    }

    #[test]
    fn test_v1_migration_folds_checking_into_fronted() {
        let value = json!({
            "savings": 100.5,
            "mgo": 0,
            "checking": 25.25,
            "fronted": 10,
            "entries": []
        });

        let ledger = decode(value).unwrap();
        assert_eq!(ledger.balances().savings.cents(), 10050);
        assert_eq!(ledger.balances().fronted.cents(), 3525);
        assert!(ledger.balances().mgo.is_zero());
    }

    #[test]
    fn test_v1_migration_types_untyped_entries() {
        let value = json!({
            "savings": 0, "mgo": 0, "checking": 0, "fronted": 0,
            "entries": [
                {
                    "id": Uuid::new_v4(),
                    "date": "2023-11-02",
                    "amount": 40.5,
                    "from": "Savings",
                    "to": "MGO",
                    "note": "old transfer"
                },
                {
                    "id": Uuid::new_v4(),
                    "date": "2023-11-03",
                    "amount": 12,
                    "from": "Checking",
                    "to": "",
                    "note": ""
                }
            ]
        });

        let ledger = decode(value).unwrap();
        let entries = ledger.store().entries();

        assert_eq!(
            entries[0].kind,
            EntryKind::Transfer {
                from: Account::Savings,
                to: Account::Mgo
            }
        );
        assert_eq!(entries[0].amount.cents(), 4050);
        assert!(!entries[0].cleared);

        // Checking is remapped to Fronted during migration
        assert_eq!(entries[1].kind, EntryKind::Debit { from: Account::Fronted });
        assert_eq!(entries[1].amount.cents(), 1200);
    }

    #[test]
    fn test_v1_entry_with_no_accounts_is_rejected() {
        let value = json!({
            "entries": [{
                "id": Uuid::new_v4(),
                "date": "2023-11-02",
                "amount": 5,
                "note": "dangling"
            }]
        });

        assert!(matches!(decode(value), Err(LedgerError::Migration(_))));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let ledger = decode(json!({ "schema_version": 2 })).unwrap();
        assert_eq!(ledger, Ledger::new());

        let legacy = decode(json!({ "savings": 5 })).unwrap();
        assert_eq!(legacy.balances().savings.cents(), 500);
        assert!(legacy.store().is_empty());
    }

    #[test]
    fn test_future_schema_version_is_rejected() {
        let err = decode(json!({ "schema_version": 3 })).unwrap_err();
        assert!(matches!(err, LedgerError::Migration(_)));
    }
}
