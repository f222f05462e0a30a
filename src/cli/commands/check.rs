use anyhow::Result;

use super::super::{
    args::CheckCommand,
    context::{load_exclusions, open_project},
};
use super::{CheckSummary, CommandResult, CommandSummary, LocaleCheck};
use crate::{catalog::parse_file, rules::check_untranslated};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common, cmd.module.as_deref())?;
    let exclusions = load_exclusions(&project);

    let locales = if cmd.locales.is_empty() {
        project.locales()?
    } else {
        cmd.locales.clone()
    };

    let mut results = Vec::with_capacity(locales.len());
    for locale in locales {
        let path = project.catalog_path(&locale);
        if cmd.common.verbose {
            eprintln!("Checking {}", project.display_path(&path));
        }

        let entries = parse_file(&path)?;
        let issues = check_untranslated(
            &entries,
            &exclusions,
            project.is_source_identity(&locale),
        );
        results.push(LocaleCheck {
            locale,
            entries_checked: entries.len(),
            issues,
        });
    }

    let summary = CheckSummary {
        locale_base: project
            .locale_base
            .strip_prefix(&project.root)
            .unwrap_or(&project.locale_base)
            .to_path_buf(),
        exclusions_loaded: exclusions.len(),
        locales: results,
    };

    Ok(CommandResult {
        error_count: summary.total_issues(),
        exit_on_errors: true,
        summary: CommandSummary::Check(summary),
    })
}
