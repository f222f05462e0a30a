//! Translation task file: the export output and import input.
//!
//! A task file carries the incomplete entries of one locale. Translators fill
//! `translation` (or `translations` for plural entries) and the file is fed
//! back to `import`.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Entry,
    error::{CatalogError, Result},
};

/// Tasks keyed by msgid.
pub type TaskMap = HashMap<String, TranslationTask>;

/// One entry to translate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTask {
    #[serde(default)]
    pub locations: Vec<String>,
    pub msgid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msgid_plural: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    /// Existing translation of a fuzzy singular entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_translation: Option<String>,
    /// Existing translations of a fuzzy plural entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_translations: Option<BTreeMap<usize, String>>,
    #[serde(default)]
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<BTreeMap<usize, String>>,
}

impl TranslationTask {
    /// Build an empty task for an incomplete entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            locations: entry.locations.clone(),
            msgid: entry.msgid.clone(),
            msgid_plural: entry.msgid_plural.clone(),
            comments: entry.comments.clone(),
            current_translation: None,
            current_translations: None,
            translation: String::new(),
            translations: entry.is_plural().then(BTreeMap::new),
        }
    }

    /// Build an empty task for a fuzzy entry, carrying its draft translation.
    pub fn from_fuzzy_entry(entry: &Entry) -> Self {
        let mut task = Self::from_entry(entry);
        if entry.is_plural() {
            task.current_translations = Some(entry.msgstr_plural.clone());
        } else {
            task.current_translation = Some(entry.msgstr.clone());
        }
        task
    }

    /// The non-empty value supplied for plural form `index`, if any.
    pub fn plural_translation(&self, index: usize) -> Option<&str> {
        self.translations
            .as_ref()?
            .get(&index)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether the translator filled in anything.
    pub fn has_content(&self) -> bool {
        !self.translation.is_empty()
            || self
                .translations
                .as_ref()
                .is_some_and(|t| t.values().any(|v| !v.is_empty()))
    }
}

/// The whole task file of one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFile {
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub untranslated_count: usize,
    #[serde(default)]
    pub fuzzy_count: usize,
    /// Untranslated entries before `--limit` was applied.
    #[serde(default)]
    pub total_untranslated: usize,
    /// Fuzzy entries before `--limit` was applied.
    #[serde(default)]
    pub total_fuzzy: usize,
    #[serde(default)]
    pub excluded_count: usize,
    #[serde(default)]
    pub entries: Vec<TranslationTask>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fuzzy_entries: Vec<TranslationTask>,
}

impl TaskFile {
    /// Load a task file. The locale field is required.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| CatalogError::from_io("Task file", path, e))?;
        let file: TaskFile = serde_json::from_str(&content).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if file.locale.trim().is_empty() {
            return Err(CatalogError::InvalidPayload(format!(
                "no locale found in {}",
                path.display()
            )));
        }
        Ok(file)
    }

    /// Write the task file as pretty-printed JSON with a trailing newline.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        json.push('\n');
        fs::write(path, json).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Split into plain and fuzzy lookup maps, dropping tasks nobody filled.
    pub fn into_maps(self) -> (TaskMap, TaskMap) {
        fn collect(tasks: Vec<TranslationTask>) -> TaskMap {
            tasks
                .into_iter()
                .filter(TranslationTask::has_content)
                .map(|task| (task.msgid.clone(), task))
                .collect()
        }
        (collect(self.entries), collect(self.fuzzy_entries))
    }
}
