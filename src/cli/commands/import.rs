use anyhow::{Context, Result};

use super::super::{args::ImportCommand, context::open_project};
use super::{CommandResult, CommandSummary, ImportSummary};
use crate::{catalog::CatalogEditor, task::TaskFile};

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let project = open_project(&cmd.common, cmd.module.as_deref())?;
    let task_file = project.resolve(&cmd.task_file);
    let file = TaskFile::load(&task_file)?;
    let catalog_path = project.catalog_path(&file.locale);

    if cmd.common.verbose {
        eprintln!(
            "Importing {} task(s) and {} fuzzy task(s) for {}",
            file.entries.len(),
            file.fuzzy_entries.len(),
            file.locale
        );
    }

    let (plain, fuzzy) = file.into_maps();
    let mut editor = CatalogEditor::open(&catalog_path)?;
    let stats = editor.apply(&plain, &fuzzy);

    let backup_path = if cmd.dry_run {
        None
    } else {
        let backup = editor
            .save()
            .with_context(|| format!("Failed to update catalog {}", catalog_path.display()))?;
        Some(backup)
    };

    Ok(CommandResult::completed(CommandSummary::Import(
        ImportSummary {
            task_file: project.display_path(&task_file).to_string().into(),
            catalog_path: project.display_path(&catalog_path).to_string().into(),
            backup_path: backup_path.map(|p| project.display_path(&p).to_string().into()),
            stats,
        },
    )))
}
