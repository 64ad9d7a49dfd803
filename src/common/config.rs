use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_FIRST_ACCOUNT_NUMBER: u64 = 1_000_000_001;

/// Ledger-wide policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    /// First number handed out by the account number generator.
    pub first_account_number: u64,
    /// Reject withdrawals of zero or negative amounts with `InvalidAmount`.
    /// Off by default: only withdrawals larger than the balance are refused.
    pub strict_withdrawals: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            first_account_number: DEFAULT_FIRST_ACCOUNT_NUMBER,
            strict_withdrawals: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// One row per account with its current balance.
    Accounts,
    /// The entry log in append order.
    Entries,
}

#[derive(Debug, Parser)]
#[command(name = "bank_ledger")]
#[command(about = "Apply a CSV command script to an in-memory ledger and print a report", long_about = None)]
pub struct Cli {
    /// Command script with headers `type,account,amount,holder,account_type`.
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = ReportKind::Accounts)]
    pub report: ReportKind,

    /// Restrict the entries report to one account's history.
    #[arg(long)]
    pub account: Option<String>,

    #[arg(long)]
    pub strict_withdrawals: bool,

    #[arg(long, default_value_t = DEFAULT_FIRST_ACCOUNT_NUMBER)]
    pub first_account_number: u64,
}

impl Cli {
    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            first_account_number: self.first_account_number,
            strict_withdrawals: self.strict_withdrawals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_permissive_withdrawals() {
        let cli = Cli::try_parse_from(["bank_ledger", "script.csv"]).unwrap();
        assert_eq!(cli.report, ReportKind::Accounts);
        assert_eq!(cli.account, None);
        assert_eq!(cli.ledger_config(), LedgerConfig::default());
    }

    #[test]
    fn flags_map_onto_ledger_config() {
        let cli = Cli::try_parse_from([
            "bank_ledger",
            "script.csv",
            "--report",
            "entries",
            "--account",
            "42",
            "--strict-withdrawals",
            "--first-account-number",
            "42",
        ])
        .unwrap();

        assert_eq!(cli.report, ReportKind::Entries);
        assert_eq!(cli.account.as_deref(), Some("42"));
        assert_eq!(
            cli.ledger_config(),
            LedgerConfig {
                first_account_number: 42,
                strict_withdrawals: true,
            }
        );
    }

    #[test]
    fn missing_input_is_a_usage_error() {
        assert!(Cli::try_parse_from(["bank_ledger"]).is_err());
    }
}
