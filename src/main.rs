use std::process::ExitCode;

use bank_ledger::common::{error::AppError, logging};

fn main() -> ExitCode {
    logging::init();

    match bank_ledger::app::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Usage(err)) => {
            // clap renders --help/--version through the error path too;
            // nowhere left to report a failed stderr write
            err.print().ok();
            if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}
