//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report empty and untranslated entries of one or more locales
//! - `export`: Write the incomplete entries of a locale to a task file
//! - `import`: Merge a filled task file back into its catalog
//! - `init`: Create a `.pofillrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Import(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by the catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root; catalogs, exclusions and task files are resolved against it
    #[arg(long, default_value = ".", env = "POFILL_ROOT")]
    pub root: PathBuf,

    /// Locale directory relative to the root (overrides config file)
    #[arg(long)]
    pub locale_root: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Locales to check (default: every locale with a catalog)
    pub locales: Vec<String>,

    /// Check the catalogs of a module instead of the project catalogs
    #[arg(long)]
    pub module: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Locale to export, e.g. fr_FR
    pub locale: String,

    /// Export at most this many untranslated and fuzzy entries (0: no limit)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Do not skip technical terms from the exclusions file
    #[arg(long)]
    pub include_excluded: bool,

    /// Task file to write, relative to the project root (default: <locale>_untranslated.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export from a module catalog instead of the project catalog
    #[arg(long)]
    pub module: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Task file produced by `export`, relative to the project root
    pub task_file: PathBuf,

    /// Report what would change without writing the catalog or a backup
    #[arg(long)]
    pub dry_run: bool,

    /// Import into a module catalog instead of the project catalog
    #[arg(long)]
    pub module: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the configuration file in
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for empty and untranslated (msgstr = msgid) entries
    Check(CheckCommand),
    /// Export untranslated and fuzzy entries of a locale to a JSON task file
    Export(ExportCommand),
    /// Import translations from a JSON task file into its catalog
    Import(ImportCommand),
    /// Initialize a new .pofillrc.json configuration file
    Init(InitCommand),
}
