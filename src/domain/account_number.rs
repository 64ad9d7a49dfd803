use std::{borrow::Borrow, fmt};

/// Opaque identifier of an account, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets `HashMap<AccountNumber, _>` be queried with a plain `&str`.
impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Hands out account numbers from an incrementing counter, so uniqueness
/// does not depend on how fast accounts are opened.
#[derive(Debug, Clone)]
pub struct AccountNumberGenerator {
    next: u64,
}

impl AccountNumberGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn next_number(&mut self) -> AccountNumber {
        let value = self.next;
        self.next += 1;
        AccountNumber(value.to_string())
    }
}

impl Default for AccountNumberGenerator {
    fn default() -> Self {
        Self::starting_at(crate::common::config::DEFAULT_FIRST_ACCOUNT_NUMBER)
    }
}
