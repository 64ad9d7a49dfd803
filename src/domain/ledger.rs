use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::{
    common::{config::LedgerConfig, error::LedgerError, money::Money},
    domain::{
        account::Account,
        account_number::{AccountNumber, AccountNumberGenerator},
        transaction::{EntryId, EntryKind, LedgerEntry},
    },
};

/// Owns every account and the append-only entry log.
///
/// All balance changes go through [`Ledger::deposit`] and [`Ledger::withdraw`],
/// which append exactly one entry per accepted change and nothing for a
/// rejected one. Callers only ever get shared references to accounts.
#[derive(Debug)]
pub struct Ledger {
    config: LedgerConfig,
    numbers: AccountNumberGenerator,
    next_entry_id: EntryId,
    accounts: HashMap<AccountNumber, Account>,
    entries: Vec<LedgerEntry>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_config(LedgerConfig::default())
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            numbers: AccountNumberGenerator::starting_at(config.first_account_number),
            next_entry_id: 1,
            accounts: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn accounts(&self) -> &HashMap<AccountNumber, Account> {
        &self.accounts
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    /// The whole log, oldest first.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Opens a zero-balance account under a freshly generated number.
    /// Holder name and type are stored as given.
    pub fn create_account(
        &mut self,
        holder_name: impl Into<String>,
        account_type: impl Into<String>,
    ) -> &Account {
        let number = self.numbers.next_number();
        let account = Account::new(number.clone(), holder_name, account_type);
        debug!(account = %number, holder = account.holder_name(), "account opened");
        self.accounts.entry(number).or_insert(account)
    }

    pub fn deposit(&mut self, number: &str, amount: Money) -> Result<&LedgerEntry, LedgerError> {
        let account = self.find_mut(number)?;
        account.deposit(amount)?;
        let number = account.number().clone();
        Ok(self.append(number, EntryKind::Deposit, amount))
    }

    pub fn withdraw(&mut self, number: &str, amount: Money) -> Result<&LedgerEntry, LedgerError> {
        let strict = self.config.strict_withdrawals;
        let account = self.find_mut(number)?;
        if strict && !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        account.withdraw(amount)?;
        let number = account.number().clone();
        Ok(self.append(number, EntryKind::Withdrawal, amount))
    }

    pub fn balance(&self, number: &str) -> Result<Money, LedgerError> {
        self.accounts
            .get(number)
            .map(Account::balance)
            .ok_or_else(|| LedgerError::AccountNotFound(number.into()))
    }

    /// Entries recorded against `number`, in append order.
    ///
    /// Does not check that the account exists: an unknown number simply has
    /// no history.
    pub fn history_for(&self, number: &str) -> Vec<&LedgerEntry> {
        self.entries
            .iter()
            .filter(|e| e.account().as_str() == number)
            .collect()
    }

    fn find_mut(&mut self, number: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| LedgerError::AccountNotFound(number.into()))
    }

    fn append(&mut self, account: AccountNumber, kind: EntryKind, amount: Money) -> &LedgerEntry {
        // Never stamp an entry earlier than its predecessor, even if the wall clock steps back.
        let now = Utc::now();
        let timestamp = self
            .entries
            .last()
            .map_or(now, |prev| prev.timestamp().max(now));

        let id = self.next_entry_id;
        self.next_entry_id += 1;

        debug!(entry = id, account = %account, ?kind, %amount, "entry appended");
        self.entries
            .push(LedgerEntry::new(id, account, kind, amount, timestamp));
        &self.entries[self.entries.len() - 1]
    }
}
