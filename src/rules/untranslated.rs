//! Empty and untranslated value detection.
//!
//! An entry is incomplete when its translation is empty or is a verbatim copy
//! of the msgid. Copies are expected in the source-identity locale (the
//! locale written in the same language as the msgids), so they are not
//! reported there.

use crate::{
    catalog::Entry,
    exclusions::ExclusionSet,
    issues::{Rule, TranslationIssue},
};

/// Check one entry. Obsolete, header and excluded entries never have issues.
///
/// # Arguments
/// * `entry` - The parsed entry
/// * `exclusions` - Technical terms to skip
/// * `source_identity` - True for the locale whose msgstr may equal its msgid
pub fn check_entry(
    entry: &Entry,
    exclusions: &ExclusionSet,
    source_identity: bool,
) -> Vec<TranslationIssue> {
    if entry.obsolete || entry.msgid.is_empty() || exclusions.is_excluded(&entry.msgid) {
        return Vec::new();
    }

    let issue = |rule: Rule, plural_index: Option<usize>| TranslationIssue {
        rule,
        msgid: entry.msgid.clone(),
        plural_index,
        locations: entry.locations.clone(),
    };

    if entry.is_plural() {
        entry
            .msgstr_plural
            .iter()
            .filter_map(|(&index, msgstr)| {
                if msgstr.is_empty() {
                    Some(issue(Rule::EmptyPlural, Some(index)))
                } else if !source_identity && *msgstr == entry.msgid {
                    Some(issue(Rule::UntranslatedPlural, Some(index)))
                } else {
                    None
                }
            })
            .collect()
    } else if entry.msgstr.is_empty() {
        vec![issue(Rule::Empty, None)]
    } else if !source_identity && entry.msgstr == entry.msgid {
        vec![issue(Rule::Untranslated, None)]
    } else {
        Vec::new()
    }
}

/// Issues of a whole catalog, in catalog order.
pub fn check_untranslated(
    entries: &[Entry],
    exclusions: &ExclusionSet,
    source_identity: bool,
) -> Vec<TranslationIssue> {
    entries
        .iter()
        .flat_map(|entry| check_entry(entry, exclusions, source_identity))
        .collect()
}
