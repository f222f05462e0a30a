use std::process::ExitCode;

use clap::Parser;
use pofill::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match pofill::cli::run_cli(args) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
