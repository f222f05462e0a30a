//! Technical terms that are not expected to be translated.
//!
//! Loaded from a JSON file of the form `{"exclusions": ["API", "URL", ...]}`.
//! A missing or unreadable file is not fatal: checks run without exclusions.

use std::{collections::HashSet, fs, path::Path, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

use crate::error::{CatalogError, Result};

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

/// Strings up to this many characters that are all upper case are treated as codes.
const SHORT_CODE_MAX_LEN: usize = 5;

#[derive(Debug, Deserialize)]
struct ExclusionsFile {
    #[serde(default)]
    exclusions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    terms: HashSet<String>,
    upper_terms: HashSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: HashSet<String> = terms.into_iter().map(Into::into).collect();
        let upper_terms = terms.iter().map(|t| t.to_uppercase()).collect();
        Self { terms, upper_terms }
    }

    /// Load the exclusions file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::from_io("Exclusions file", path, e))?;
        let file: ExclusionsFile =
            serde_json::from_str(&content).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(file.exclusions))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `msgid` should be skipped by completeness checks.
    ///
    /// An empty set excludes nothing. Otherwise a msgid is excluded when it is
    /// a listed term, when every word in it is a listed term (ignoring case),
    /// or when it is a short all-caps code.
    pub fn is_excluded(&self, msgid: &str) -> bool {
        if self.terms.is_empty() {
            return false;
        }

        if self.terms.contains(msgid) {
            return true;
        }

        let mut words = WORD.find_iter(msgid).peekable();
        if words.peek().is_some()
            && words.all(|word| self.upper_terms.contains(&word.as_str().to_uppercase()))
        {
            return true;
        }

        msgid.chars().count() <= SHORT_CODE_MAX_LEN && is_all_upper(msgid)
    }
}

/// At least one cased character and no lower-case ones.
fn is_all_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}
