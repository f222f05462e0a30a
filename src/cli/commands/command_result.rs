use std::path::PathBuf;

use crate::{
    catalog::UpdateStats,
    issues::TranslationIssue,
    task::TaskFile,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Export(ExportSummary),
    Import(ImportSummary),
    Init(InitSummary),
}

/// Check result of one locale.
#[derive(Debug)]
pub struct LocaleCheck {
    pub locale: String,
    pub entries_checked: usize,
    pub issues: Vec<TranslationIssue>,
}

impl LocaleCheck {
    pub fn empty_count(&self) -> usize {
        self.issues.iter().filter(|i| i.rule.is_empty_kind()).count()
    }

    pub fn untranslated_count(&self) -> usize {
        self.issues.len() - self.empty_count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Locale base, relative to the project root.
    pub locale_base: PathBuf,
    pub exclusions_loaded: usize,
    pub locales: Vec<LocaleCheck>,
}

impl CheckSummary {
    pub fn total_issues(&self) -> usize {
        self.locales.iter().map(|l| l.issues.len()).sum()
    }

    pub fn clean_locales(&self) -> usize {
        self.locales.iter().filter(|l| l.is_clean()).count()
    }
}

#[derive(Debug)]
pub struct ExportSummary {
    pub catalog_path: PathBuf,
    pub output_path: PathBuf,
    pub exclusions_loaded: usize,
    pub limited: bool,
    pub file: TaskFile,
}

#[derive(Debug)]
pub struct ImportSummary {
    pub task_file: PathBuf,
    pub catalog_path: PathBuf,
    /// None on dry runs.
    pub backup_path: Option<PathBuf>,
    pub stats: UpdateStats,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running pofill commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of problems found. Only checks report any.
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}

impl CommandResult {
    /// Result of a command that does not report problems.
    pub fn completed(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
            exit_on_errors: false,
        }
    }
}
