use chrono::{DateTime, Utc};

use crate::{common::money::Money, domain::account_number::AccountNumber};

pub type EntryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

/// An accepted balance change. Entries are created by the ledger and never
/// modified afterwards, so all fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    id: EntryId,
    account: AccountNumber,
    kind: EntryKind,
    amount: Money,
    timestamp: DateTime<Utc>,
}

impl LedgerEntry {
    pub(crate) fn new(
        id: EntryId,
        account: AccountNumber,
        kind: EntryKind,
        amount: Money,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account,
            kind,
            amount,
            timestamp,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn account(&self) -> &AccountNumber {
        &self.account
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
