use crate::common::money::Money;

/// A single ledger request parsed from the command script and handed to the
/// processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    Open { holder: String, account_type: String },
    Deposit { account: String, amount: Money },
    Withdrawal { account: String, amount: Money },
    Balance { account: String },
}
