use crate::{
    common::{error::LedgerError, money::Money},
    domain::account_number::AccountNumber,
};

/// A named balance holder. Number, holder and type are fixed at creation;
/// the balance only moves through [`Account::deposit`] and [`Account::withdraw`].
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    account_type: String,
    balance: Money,
}

impl Account {
    pub fn new(
        number: AccountNumber,
        holder_name: impl Into<String>,
        account_type: impl Into<String>,
    ) -> Self {
        Self {
            number,
            holder_name: holder_name.into(),
            account_type: account_type.into(),
            balance: Money::zero(),
        }
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Credits `amount`. Zero and negative amounts are rejected, as are
    /// amounts that would push the balance past the representable range.
    pub fn deposit(&mut self, amount: Money) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;
        Ok(())
    }

    /// Debits `amount` unless it exceeds the balance.
    ///
    /// Only the upper bound is checked here: a zero or negative amount passes
    /// (a negative one effectively credits the account). `Ledger` can refuse
    /// those up front when `LedgerConfig::strict_withdrawals` is set.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InvalidAmount(amount))?;
        Ok(())
    }
}
