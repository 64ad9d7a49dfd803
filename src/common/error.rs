use crate::{common::money::Money, domain::account_number::AccountNumber};

/// Rejections reported by ledger operations. Every variant is expected and
/// user-correctable; a rejected operation leaves balances and the entry log
/// untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(Money),
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },
    #[error("account not found: {0}")]
    AccountNotFound(AccountNumber),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
