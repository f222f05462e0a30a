//! Command-line interface layer.
//!
//! Commands return a [`commands::CommandResult`]; all printing happens in
//! `report` afterwards, so the library stays free of output side effects.

use anyhow::Result;

mod args;
pub mod commands;
mod context;
mod exit_code;
mod exit_status;
mod report;
mod run;

pub use args::{
    Arguments, CheckCommand, Command, CommonArgs, ExportCommand, ImportCommand, InitCommand,
};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}
