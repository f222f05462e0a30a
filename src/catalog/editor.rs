use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use jiff::Zoned;
use regex::Regex;

use super::{
    blocks::{Token, tokenize},
    entry::FUZZY_FLAG,
    escape::{format_string, unquote},
    parser::{is_obsolete, msgid_fragment, read_catalog},
};
use crate::{
    error::{CatalogError, Result},
    task::{TaskMap, TranslationTask},
};

static PLURAL_MSGSTR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^msgstr\[(\d+)\] ").expect("valid msgstr[N] regex"));

/// Counters reported after applying translations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// `msgstr` / `msgstr[N]` directives rewritten.
    pub updated: usize,
    /// `fuzzy` flags removed.
    pub fuzzy_cleared: usize,
}

/// An editor that patches translations into a catalog in place.
///
/// Only the `msgstr` lines of matching entries and their `#,` flag lines are
/// touched; every other byte of the file is written back as it was read.
pub struct CatalogEditor {
    file_path: PathBuf,
    content: String,
}

impl CatalogEditor {
    /// Open a catalog for editing.
    pub fn open(path: &Path) -> Result<Self> {
        let content = read_catalog(path)?;
        Ok(Self {
            file_path: path.to_path_buf(),
            content,
        })
    }

    /// Apply plain and fuzzy translations to the in-memory content.
    pub fn apply(&mut self, plain: &TaskMap, fuzzy: &TaskMap) -> UpdateStats {
        let (content, stats) = rewrite(&self.content, plain, fuzzy);
        self.content = content;
        stats
    }

    /// Copy the file as it is on disk to a timestamped backup.
    pub fn backup(&self) -> Result<PathBuf> {
        let backup = backup_path(&self.file_path, &Zoned::now());
        fs::copy(&self.file_path, &backup).map_err(|source| CatalogError::BackupFailure {
            path: backup.clone(),
            source,
        })?;
        Ok(backup)
    }

    /// Back up the original file, then overwrite it with the edited content.
    ///
    /// Nothing is written when the backup fails. Returns the backup path.
    pub fn save(&self) -> Result<PathBuf> {
        let backup = self.backup()?;
        fs::write(&self.file_path, &self.content).map_err(|source| CatalogError::Io {
            path: self.file_path.clone(),
            source,
        })?;
        Ok(backup)
    }
}

/// `<path>.backup.YYYYmmdd_HHMMSS`
pub fn backup_path(path: &Path, now: &Zoned) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".backup.{}", now.strftime("%Y%m%d_%H%M%S")));
    PathBuf::from(name)
}

/// Rewrite `content`, patching the blocks whose msgid has a task.
///
/// A msgid present in `fuzzy` is handled as fuzzy even when `plain` has it too.
pub fn rewrite(content: &str, plain: &TaskMap, fuzzy: &TaskMap) -> (String, UpdateStats) {
    let mut stats = UpdateStats::default();
    let mut out = String::with_capacity(content.len());

    for token in tokenize(content) {
        let Token::Block(block) = token else {
            out.push_str(token.as_str());
            continue;
        };

        let msgid = scan_msgid(block);
        let target = if msgid.is_empty() {
            None
        } else if let Some(task) = fuzzy.get(&msgid) {
            Some((task, true))
        } else {
            plain.get(&msgid).map(|task| (task, false))
        };

        match target {
            Some((task, is_fuzzy)) => out.push_str(&rewrite_block(block, task, is_fuzzy, &mut stats)),
            None => out.push_str(block),
        }
    }

    (out, stats)
}

/// Read the msgid of a block without parsing the rest of it.
///
/// Agrees with [`parse_block`](super::parse_block): obsolete blocks have no
/// msgid, and the last `msgid` directive wins.
pub fn scan_msgid(block: &str) -> String {
    if is_obsolete(block) {
        return String::new();
    }

    let mut lines = block.lines().map(str::trim).peekable();
    let mut msgid = String::new();
    while let Some(line) = lines.next() {
        if line.starts_with('#') {
            continue;
        }
        let Some(first) = msgid_fragment(line) else {
            continue;
        };
        msgid = unquote(first);
        while let Some(continuation) = lines.next_if(|l| l.starts_with('"')) {
            msgid.push_str(&unquote(continuation));
        }
    }
    msgid
}

fn rewrite_block(
    block: &str,
    task: &TranslationTask,
    is_fuzzy: bool,
    stats: &mut UpdateStats,
) -> String {
    let lines: Vec<&str> = block.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();
        let eol = if line.ends_with('\r') { "\r" } else { "" };
        i += 1;

        if is_fuzzy && let Some(rest) = trimmed.strip_prefix("#,") {
            let flags: Vec<&str> = rest.split(',').map(str::trim).collect();
            if flags.contains(&FUZZY_FLAG) {
                let remaining: Vec<&str> = flags
                    .into_iter()
                    .filter(|f| !f.is_empty() && *f != FUZZY_FLAG)
                    .collect();
                if !remaining.is_empty() {
                    out.push(format!("#, {}{}", remaining.join(", "), eol));
                }
                stats.fuzzy_cleared += 1;
                continue;
            }
        }

        let replacement = if task.msgid_plural.is_none() && trimmed.starts_with("msgstr ") {
            Some(("msgstr".to_string(), task.translation.as_str()))
        } else {
            PLURAL_MSGSTR_PREFIX
                .captures(trimmed)
                .and_then(|caps| caps[1].parse::<usize>().ok())
                .and_then(|index| {
                    task.plural_translation(index)
                        .map(|value| (format!("msgstr[{}]", index), value))
                })
        };

        let Some((keyword, value)) = replacement else {
            out.push(line.to_string());
            continue;
        };

        let formatted = format_string(value);
        out.push(format!("{} {}{}", keyword, formatted[0], eol));
        out.extend(formatted[1..].iter().map(|l| format!("{}{}", l, eol)));

        // Drop the continuation lines of the replaced value.
        while i < lines.len() && lines[i].trim().starts_with('"') {
            i += 1;
        }
        stats.updated += 1;
    }

    out.join("\n")
}
