//! Building the task file for off-line translation.

use crate::{
    catalog::Entry,
    exclusions::ExclusionSet,
    rules::untranslated::check_entry,
    task::{TaskFile, TranslationTask},
};

/// Collect the incomplete and fuzzy entries of a catalog into a task file.
///
/// Fuzzy entries always go to `fuzzy_entries`, complete or not. The other
/// entries go to `entries` when they have at least one issue. Excluded entries
/// that would have been exported are only counted. `limit` truncates both
/// lists independently; the totals are counted before truncation.
pub fn extract_tasks(
    locale: &str,
    entries: &[Entry],
    exclusions: &ExclusionSet,
    source_identity: bool,
    limit: Option<usize>,
) -> TaskFile {
    let mut untranslated = Vec::new();
    let mut fuzzy = Vec::new();
    let mut excluded_count = 0;

    // Classification runs without exclusions so excluded entries can be counted.
    let no_exclusions = ExclusionSet::default();

    for entry in entries.iter().filter(|e| !e.obsolete && !e.msgid.is_empty()) {
        let is_fuzzy = entry.is_fuzzy();
        if !is_fuzzy && check_entry(entry, &no_exclusions, source_identity).is_empty() {
            continue;
        }
        if exclusions.is_excluded(&entry.msgid) {
            excluded_count += 1;
        } else if is_fuzzy {
            fuzzy.push(TranslationTask::from_fuzzy_entry(entry));
        } else {
            untranslated.push(TranslationTask::from_entry(entry));
        }
    }

    let total_untranslated = untranslated.len();
    let total_fuzzy = fuzzy.len();
    if let Some(limit) = limit {
        untranslated.truncate(limit);
        fuzzy.truncate(limit);
    }

    TaskFile {
        locale: locale.to_string(),
        untranslated_count: untranslated.len(),
        fuzzy_count: fuzzy.len(),
        total_untranslated,
        total_fuzzy,
        excluded_count,
        entries: untranslated,
        fuzzy_entries: fuzzy,
    }
}
