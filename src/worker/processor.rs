use tracing::{info, warn};

use crate::{
    common::{error::LedgerError, event::LedgerCommand, money::Money},
    domain::{account_number::AccountNumber, ledger::Ledger, transaction::EntryId},
};

/// What happened to a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened(AccountNumber),
    Applied(EntryId),
    Balance(Money),
    Rejected(LedgerError),
}

/// Applies commands to a ledger one at a time. Rejections are reported and
/// counted, never retried and never fatal.
#[derive(Debug, Default)]
pub struct Processor {
    accepted: usize,
    rejected: usize,
}

impl Processor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands that succeeded, including opens and balance queries.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn process(&mut self, ledger: &mut Ledger, command: LedgerCommand) -> Outcome {
        let result = match command {
            LedgerCommand::Open {
                holder,
                account_type,
            } => Ok(Outcome::Opened(
                ledger.create_account(holder, account_type).number().clone(),
            )),
            LedgerCommand::Deposit { account, amount } => ledger
                .deposit(&account, amount)
                .map(|entry| Outcome::Applied(entry.id())),
            LedgerCommand::Withdrawal { account, amount } => ledger
                .withdraw(&account, amount)
                .map(|entry| Outcome::Applied(entry.id())),
            LedgerCommand::Balance { account } => ledger.balance(&account).map(|balance| {
                info!(%account, %balance, "balance");
                Outcome::Balance(balance)
            }),
        };

        match result {
            Ok(outcome) => {
                self.accepted += 1;
                outcome
            }
            Err(err) => {
                warn!(error = %err, "command rejected");
                self.rejected += 1;
                Outcome::Rejected(err)
            }
        }
    }
}
