use std::io::{BufWriter, Write, stdout};

use clap::Parser;
use tracing::{info, warn};

use crate::{
    common::{
        config::{Cli, ReportKind},
        error::{AppError, LedgerError},
    },
    domain::ledger::Ledger,
    io::{reader, writer},
    worker::processor::Processor,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let cli = Cli::try_parse_from(args)?;

    let file = std::fs::File::open(&cli.input)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut ledger = Ledger::with_config(cli.ledger_config());
    let mut processor = Processor::new();

    for command in reader::read_commands(&mut reader) {
        let command = command.map_err(AppError::Parse)?;
        processor.process(&mut ledger, command);
    }

    info!(
        accepted = processor.accepted(),
        rejected = processor.rejected(),
        accounts = ledger.accounts().len(),
        entries = ledger.entries().len(),
        "script finished"
    );

    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    write_report(out, &ledger, cli.report, cli.account.as_deref())
}

/// Writes the selected report. A history request for an unknown account is
/// an error rather than an empty report.
pub fn write_report<W: Write>(
    out: W,
    ledger: &Ledger,
    report: ReportKind,
    account: Option<&str>,
) -> Result<(), AppError> {
    match (report, account) {
        (ReportKind::Accounts, _) => writer::write_accounts(out, ledger.accounts())?,
        (ReportKind::Entries, Some(account)) => {
            if ledger.account(account).is_none() {
                warn!(%account, "history requested for unknown account");
                return Err(LedgerError::AccountNotFound(account.into()).into());
            }
            writer::write_entries(out, ledger.history_for(account))?
        }
        (ReportKind::Entries, None) => writer::write_entries(out, ledger.entries())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.create_account("Alice", "Savings");
        ledger.create_account("Bob", "Checking");
        ledger.deposit("1000000001", Money::units(100)).unwrap();
        ledger.deposit("1000000002", Money::units(7)).unwrap();
        ledger.withdraw("1000000001", Money::units(40)).unwrap();
        ledger
    }

    fn report_lines(ledger: &Ledger, report: ReportKind, account: Option<&str>) -> Vec<String> {
        let mut out = Vec::new();
        write_report(&mut out, ledger, report, account).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn accounts_report_ignores_account_filter() {
        let lines = report_lines(&sample_ledger(), ReportKind::Accounts, Some("1000000002"));
        assert_eq!(
            lines,
            vec![
                "account,holder,account_type,balance",
                "1000000001,Alice,Savings,60.0000",
                "1000000002,Bob,Checking,7.0000",
            ]
        );
    }

    #[test]
    fn entries_report_lists_whole_log() {
        let lines = report_lines(&sample_ledger(), ReportKind::Entries, None);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("1,1000000001,deposit,100.0000,"));
        assert!(lines[2].starts_with("2,1000000002,deposit,7.0000,"));
        assert!(lines[3].starts_with("3,1000000001,withdrawal,40.0000,"));
    }

    #[test]
    fn entries_report_for_one_account() {
        let lines = report_lines(&sample_ledger(), ReportKind::Entries, Some("1000000001"));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,1000000001,deposit,"));
        assert!(lines[2].starts_with("3,1000000001,withdrawal,"));
    }

    #[test]
    fn entries_report_for_idle_account_is_empty() {
        let mut ledger = sample_ledger();
        ledger.create_account("Carol", "Savings");
        assert!(report_lines(&ledger, ReportKind::Entries, Some("1000000003")).is_empty());
    }

    #[test]
    fn entries_report_for_unknown_account_fails() {
        let mut out = Vec::new();
        let err = write_report(&mut out, &sample_ledger(), ReportKind::Entries, Some("nope"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Ledger(LedgerError::AccountNotFound(ref n)) if n.as_str() == "nope"
        ));
        assert!(out.is_empty());
    }
}
