use crate::common::{event::LedgerCommand, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the script headers. Columns a
/// command does not use stay empty.
struct CsvRow {
    #[serde(rename = "type")]
    op: String,
    #[serde(default)]
    account: Option<String>,
    #[serde(default)]
    amount: Option<String>,
    #[serde(default)]
    holder: Option<String>,
    #[serde(default)]
    account_type: Option<String>,
}

impl CsvRow {
    fn require_account(&self, op: &str) -> Result<String, String> {
        self.account
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| format!("{op} missing account"))
    }

    fn require_amount(&self, op: &str, account: &str) -> Result<Money, String> {
        let raw = self
            .amount
            .as_deref()
            .ok_or_else(|| format!("{op} missing amount for account {account}"))?;
        Money::from_str(raw).map_err(|e| format!("{op} bad amount {raw:?} for account {account}: {e}"))
    }
}

/// Reads ledger commands from a CSV script.
///
/// Supported headers: `type,account,amount,holder,account_type`.
/// `type` is matched case-insensitively against `open`, `deposit`,
/// `withdrawal` and `balance`. Deposits and withdrawals need an account and
/// an amount, balance queries need an account; `open` takes holder and type
/// as given (blank when absent).
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_commands;
/// use bank_ledger::common::event::LedgerCommand;
/// use csv::ReaderBuilder;
///
/// let data = "type,account,amount,holder,account_type\n\
/// open,,,Alice,Savings\n\
/// deposit,1000000001,100,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(LedgerCommand::Open { .. })));
/// assert!(matches!(commands[1], Ok(LedgerCommand::Deposit { .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerCommand, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let op = row.op.trim().to_ascii_lowercase();

        match op.as_str() {
            "open" => Ok(LedgerCommand::Open {
                holder: row.holder.unwrap_or_default(),
                account_type: row.account_type.unwrap_or_default(),
            }),
            "deposit" => {
                let account = row.require_account(&op)?;
                let amount = row.require_amount(&op, &account)?;
                Ok(LedgerCommand::Deposit { account, amount })
            }
            "withdrawal" => {
                let account = row.require_account(&op)?;
                let amount = row.require_amount(&op, &account)?;
                Ok(LedgerCommand::Withdrawal { account, amount })
            }
            "balance" => Ok(LedgerCommand::Balance {
                account: row.require_account(&op)?,
            }),
            other => Err(format!("unknown command type: {other}")),
        }
    })
}
