use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, export::export, import::import, init::init},
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Import(cmd)) => import(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
