//! Where catalogs live.
//!
//! Everything is resolved against an explicit project root; the process
//! working directory is never changed.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{
    config::Config,
    error::{CatalogError, Result},
    exclusions::ExclusionSet,
};

/// Directory layout of the catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLayout {
    /// `<localeRoot>/<lang>/LC_MESSAGES/<catalogName>`
    Project,
    /// `<moduleRoot>/<module>/locale/<lang>/<catalogName>`
    Module(String),
}

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub layout: CatalogLayout,
    /// Directory whose subdirectories are the locales.
    pub locale_base: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, config: Config, module: Option<String>) -> Self {
        let root = root.into();
        let (layout, locale_base) = match module {
            Some(module) => {
                let base = root.join(&config.module_root).join(&module).join("locale");
                (CatalogLayout::Module(module), base)
            }
            None => (CatalogLayout::Project, root.join(&config.locale_root)),
        };
        Self {
            root,
            config,
            layout,
            locale_base,
        }
    }

    /// Path of the catalog for `locale`. The file may not exist.
    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        let dir = self.locale_base.join(locale);
        match self.layout {
            CatalogLayout::Project => dir.join("LC_MESSAGES").join(&self.config.catalog_name),
            CatalogLayout::Module(_) => dir.join(&self.config.catalog_name),
        }
    }

    /// Locales under the locale base that have a catalog, sorted by name.
    pub fn locales(&self) -> Result<Vec<String>> {
        if !self.locale_base.is_dir() {
            return Err(CatalogError::NotFound {
                what: "Locale directory",
                path: self.locale_base.clone(),
            });
        }

        let mut locales = Vec::new();
        for entry in WalkDir::new(&self.locale_base)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| CatalogError::Io {
                path: self.locale_base.clone(),
                source: e.into(),
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let locale = entry.file_name().to_string_lossy().to_string();
            if self.catalog_path(&locale).is_file() {
                locales.push(locale);
            }
        }
        Ok(locales)
    }

    /// Translations equal to their msgid are expected in this locale.
    pub fn is_source_identity(&self, locale: &str) -> bool {
        locale == self.config.source_locale
    }

    pub fn exclusions_path(&self) -> PathBuf {
        self.root.join(&self.config.exclusions_file)
    }

    pub fn load_exclusions(&self) -> Result<ExclusionSet> {
        ExclusionSet::load(&self.exclusions_path())
    }

    /// Default location of the exported task file for `locale`.
    pub fn task_file_path(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{}_untranslated.json", locale))
    }

    /// Resolve a path given on the command line. Relative paths are taken
    /// from the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Show `path` relative to the project root when possible.
    pub fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.root).unwrap_or(path).display()
    }
}
