use std::fs;

use anyhow::{Context, Result, bail};

use super::super::args::InitCommand;
use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = cmd.root.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::write(&config_path, default_config_json()? + "\n")
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult::completed(CommandSummary::Init(
        InitSummary { path: config_path },
    )))
}
