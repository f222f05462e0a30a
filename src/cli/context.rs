use anyhow::{Context, Result};
use colored::Colorize;

use super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    exclusions::ExclusionSet,
    project::Project,
};

/// Resolve the project root, load its configuration and apply overrides.
pub fn open_project(common: &CommonArgs, module: Option<&str>) -> Result<Project> {
    let root = common
        .root
        .canonicalize()
        .with_context(|| format!("Project root not found: {}", common.root.display()))?;

    let loaded = load_config(&root)?;
    if common.verbose && !loaded.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let mut config = loaded.config;
    if let Some(locale_root) = &common.locale_root {
        config.locale_root = locale_root.clone();
    }

    Ok(Project::new(root, config, module.map(str::to_string)))
}

/// Load the exclusion set, degrading to an empty one with a warning.
pub fn load_exclusions(project: &Project) -> ExclusionSet {
    match project.load_exclusions() {
        Ok(exclusions) => exclusions,
        Err(err) => {
            eprintln!(
                "{} {}. Continuing without exclusions.",
                "warning:".bold().yellow(),
                err
            );
            ExclusionSet::default()
        }
    }
}
