//! Issue types for translation completeness checks.
//!
//! Each issue is self-contained with everything the reporter needs to show it.

use std::fmt;

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Empty,
    EmptyPlural,
    Untranslated,
    UntranslatedPlural,
}

impl Rule {
    /// Empty translations, as opposed to copies of the source text.
    pub fn is_empty_kind(self) -> bool {
        matches!(self, Rule::Empty | Rule::EmptyPlural)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Empty => write!(f, "empty"),
            Rule::EmptyPlural => write!(f, "empty_plural"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::UntranslatedPlural => write!(f, "untranslated_plural"),
        }
    }
}

/// An incomplete translation found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationIssue {
    pub rule: Rule,
    pub msgid: String,
    /// Plural form index, for `*_plural` rules.
    pub plural_index: Option<usize>,
    /// Source references of the entry.
    pub locations: Vec<String>,
}

impl TranslationIssue {
    /// Human readable description of what is wrong.
    pub fn description(&self) -> String {
        let target = match self.plural_index {
            Some(index) => format!("msgstr[{}]", index),
            None => "msgstr".to_string(),
        };
        if self.rule.is_empty_kind() {
            format!("{} is empty", target)
        } else {
            format!("{} equals msgid (not translated)", target)
        }
    }

    /// First source reference, if any.
    pub fn location(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }
}
