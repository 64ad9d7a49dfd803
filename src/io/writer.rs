use std::{cmp::Ordering, collections::HashMap, io::Write};

use chrono::SecondsFormat;

use crate::{
    common::money::Money,
    domain::{
        account::Account,
        account_number::AccountNumber,
        transaction::{EntryId, EntryKind, LedgerEntry},
    },
};

#[derive(serde::Serialize)]
/// Headers written (in this order): `account,holder,account_type,balance`.
struct AccountRow<'a> {
    account: &'a AccountNumber,
    holder: &'a str,
    account_type: &'a str,
    balance: Money,
}

#[derive(serde::Serialize)]
/// Headers written (in this order): `id,account,kind,amount,timestamp`.
struct EntryRow<'a> {
    id: EntryId,
    account: &'a AccountNumber,
    kind: EntryKind,
    amount: Money,
    timestamp: String,
}

/// Writes one row per account, sorted by account number for deterministic
/// output. Balances are formatted with exactly 4 decimal places.
///
/// # Examples
///
/// ```
/// use bank_ledger::domain::ledger::Ledger;
/// use bank_ledger::io::writer::write_accounts;
///
/// let mut ledger = Ledger::new();
/// ledger.create_account("Alice", "Savings");
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, ledger.accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "account,holder,account_type,balance\n1000000001,Alice,Savings,0.0000\n");
/// ```
pub fn write_accounts<W: Write>(
    writer: W,
    accounts: &HashMap<AccountNumber, Account>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut sorted: Vec<&Account> = accounts.values().collect();
    sorted.sort_unstable_by(|a, b| by_account_number(a.number(), b.number()));

    for acc in sorted {
        wtr.serialize(AccountRow {
            account: acc.number(),
            holder: acc.holder_name(),
            account_type: acc.account_type(),
            balance: acc.balance(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

// Numeric order when both parse, so `9` sorts before `10`.
fn by_account_number(a: &AccountNumber, b: &AccountNumber) -> Ordering {
    match (a.as_str().parse::<u64>(), b.as_str().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Writes entries in the order given, timestamps as RFC 3339 (UTC, microseconds).
pub fn write_entries<'a, W, I>(writer: W, entries: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for entry in entries {
        wtr.serialize(EntryRow {
            id: entry.id(),
            account: entry.account(),
            kind: entry.kind(),
            amount: entry.amount(),
            timestamp: entry
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
