//! Catalog (`.po`) parser.
//!
//! Parsing is total: a block that does not follow the expected syntax still
//! yields an entry, with whatever fields could be read.

use std::{fs, path::Path, sync::LazyLock};

use regex::Regex;

use super::{blocks::blocks, entry::Entry, escape::unquote};
use crate::error::{CatalogError, Result};

static PLURAL_MSGSTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^msgstr\[(\d+)\] (.+)").expect("valid msgstr[N] regex"));

/// The keyword whose value is being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    MsgId,
    MsgIdPlural,
    MsgStr,
    MsgStrPlural(usize),
}

/// Recognize a directive line, returning the keyword and its first fragment.
fn parse_directive(line: &str) -> Option<(Directive, &str)> {
    if let Some(rest) = line.strip_prefix("msgid_plural ") {
        return Some((Directive::MsgIdPlural, rest));
    }
    if let Some(rest) = line.strip_prefix("msgid ") {
        return Some((Directive::MsgId, rest));
    }
    if let Some(rest) = line.strip_prefix("msgstr ") {
        return Some((Directive::MsgStr, rest));
    }
    let caps = PLURAL_MSGSTR.captures(line)?;
    // An index too large for usize is treated like any other unknown line.
    let index = caps.get(1)?.as_str().parse().ok()?;
    let rest = caps.get(2)?.as_str();
    Some((Directive::MsgStrPlural(index), rest))
}

/// The first fragment of a `msgid` line, as `parse_block` reads it.
pub(super) fn msgid_fragment(line: &str) -> Option<&str> {
    match parse_directive(line)? {
        (Directive::MsgId, rest) => Some(rest),
        _ => None,
    }
}

/// Whether the block holds an obsolete (`#~`) entry.
pub(super) fn is_obsolete(block: &str) -> bool {
    block.lines().any(|line| line.trim_start().starts_with("#~"))
}

/// Parse a whole catalog, skipping the header and obsolete entries.
pub fn parse_catalog(content: &str) -> Vec<Entry> {
    blocks(content)
        .map(parse_block)
        .filter(|entry| !entry.is_header())
        .collect()
}

/// Read and parse the catalog at `path`.
pub fn parse_file(path: &Path) -> Result<Vec<Entry>> {
    let content = read_catalog(path)?;
    Ok(parse_catalog(&content))
}

/// Read a catalog, reporting a missing file as [`CatalogError::NotFound`].
pub fn read_catalog(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CatalogError::from_io("Catalog", path, e))
}

/// Parse a single block of catalog text into an entry.
pub fn parse_block(block: &str) -> Entry {
    let mut entry = Entry::default();

    if is_obsolete(block) {
        entry.obsolete = true;
        return entry;
    }

    let mut lines = block.trim().lines().map(str::trim).peekable();
    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix("#:") {
            entry.locations.push(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("#,") {
            entry.flags = rest.split(',').map(|f| f.trim().to_string()).collect();
        } else if line.starts_with('#') {
            entry.comments.push(line.to_string());
        } else if let Some((directive, first)) = parse_directive(line) {
            let mut value = unquote(first);
            while let Some(continuation) = lines.next_if(|l| l.starts_with('"')) {
                value.push_str(&unquote(continuation));
            }
            match directive {
                Directive::MsgId => entry.msgid = value,
                Directive::MsgIdPlural => entry.msgid_plural = Some(value),
                Directive::MsgStr => entry.msgstr = value,
                Directive::MsgStrPlural(index) => {
                    entry.msgstr_plural.insert(index, value);
                }
            }
        }
    }

    entry
}
