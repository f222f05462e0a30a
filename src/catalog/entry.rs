use std::collections::BTreeMap;

/// Flag marking a translation that needs human review.
pub const FUZZY_FLAG: &str = "fuzzy";

/// One translatable unit of a catalog.
///
/// This is a read-only view derived from the catalog text. Writing goes
/// through [`super::CatalogEditor`], never through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub msgid: String,
    pub msgid_plural: Option<String>,
    pub msgstr: String,
    pub msgstr_plural: BTreeMap<usize, String>,
    /// Source references from `#:` lines, in file order.
    pub locations: Vec<String>,
    /// Tokens from the `#,` line.
    pub flags: Vec<String>,
    /// Other `#` comment lines, kept verbatim.
    pub comments: Vec<String>,
    pub obsolete: bool,
}

impl Entry {
    pub fn is_plural(&self) -> bool {
        self.msgid_plural.is_some()
    }

    pub fn is_fuzzy(&self) -> bool {
        self.flags.iter().any(|f| f == FUZZY_FLAG)
    }

    /// The header and obsolete blocks carry no msgid.
    pub fn is_header(&self) -> bool {
        self.msgid.is_empty()
    }
}
