use anyhow::{Context, Result};

use super::super::{
    args::ExportCommand,
    context::{load_exclusions, open_project},
};
use super::{CommandResult, CommandSummary, ExportSummary};
use crate::{catalog::parse_file, exclusions::ExclusionSet, rules::extract_tasks};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common, cmd.module.as_deref())?;
    let catalog_path = project.catalog_path(&cmd.locale);
    let entries = parse_file(&catalog_path)?;

    let exclusions = if cmd.include_excluded {
        ExclusionSet::default()
    } else {
        load_exclusions(&project)
    };

    // 0 means no limit.
    let limit = cmd.limit.filter(|&n| n > 0);
    let file = extract_tasks(
        &cmd.locale,
        &entries,
        &exclusions,
        project.is_source_identity(&cmd.locale),
        limit,
    );

    let output_path = match &cmd.output {
        Some(output) => project.resolve(output),
        None => project.task_file_path(&cmd.locale),
    };
    file.save(&output_path)
        .with_context(|| format!("Failed to write task file for {}", cmd.locale))?;

    Ok(CommandResult::completed(CommandSummary::Export(
        ExportSummary {
            catalog_path: project.display_path(&catalog_path).to_string().into(),
            output_path: project.display_path(&output_path).to_string().into(),
            exclusions_loaded: exclusions.len(),
            limited: limit.is_some(),
            file,
        },
    )))
}
