//! Account registry
//!
//! The set of accounts is a closed enumeration fixed for the lifetime of the
//! ledger. Unknown account names are rejected when parsed rather than being
//! silently ignored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

use super::money::Money;

/// One named balance-holding slot in the fixed registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    Savings,
    Mgo,
    Fronted,
}

impl Account {
    /// All accounts, in display order
    pub const ALL: [Account; 3] = [Account::Savings, Account::Mgo, Account::Fronted];

    /// Parse an account name, case-insensitively
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Ok(Self::Savings),
            "mgo" => Ok(Self::Mgo),
            "fronted" => Ok(Self::Fronted),
            _ => Err(LedgerError::InvalidAccount(s.to_string())),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Savings => write!(f, "Savings"),
            Self::Mgo => write!(f, "MGO"),
            Self::Fronted => write!(f, "Fronted"),
        }
    }
}

impl FromStr for Account {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Current balance of every account in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balances {
    #[serde(default)]
    pub savings: Money,
    #[serde(default)]
    pub mgo: Money,
    #[serde(default)]
    pub fronted: Money,
}

impl Balances {
    /// All-zero balances
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add a signed delta to the named account's balance
    pub fn apply_delta(&mut self, account: Account, delta: Money) {
        *self.slot_mut(account) += delta;
    }

    /// Current balance of the named account
    pub fn balance_of(&self, account: Account) -> Money {
        match account {
            Account::Savings => self.savings,
            Account::Mgo => self.mgo,
            Account::Fronted => self.fronted,
        }
    }

    /// Reset the named account to zero, returning the old balance
    pub fn reset(&mut self, account: Account) -> Money {
        std::mem::take(self.slot_mut(account))
    }

    fn slot_mut(&mut self, account: Account) -> &mut Money {
        match account {
            Account::Savings => &mut self.savings,
            Account::Mgo => &mut self.mgo,
            Account::Fronted => &mut self.fronted,
        }
    }
}
