//! Splitting catalog text into entry blocks.
//!
//! Blocks are separated by runs of blank lines. The separators are kept as
//! tokens of their own so the original text can be rebuilt byte for byte.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid block separator regex"));

/// One piece of a catalog's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text between two separators. May be whitespace only at the file edges.
    Block(&'a str),
    /// A newline, optional whitespace, and another newline.
    Separator(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Block(s) | Token::Separator(s) => s,
        }
    }
}

/// Split `content` into alternating block and separator tokens.
///
/// The result always starts and ends with a block, and concatenating every
/// token yields `content` unchanged.
pub fn tokenize(content: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in BLOCK_SEPARATOR.find_iter(content) {
        tokens.push(Token::Block(&content[last..m.start()]));
        tokens.push(Token::Separator(m.as_str()));
        last = m.end();
    }
    tokens.push(Token::Block(&content[last..]));
    tokens
}

/// Iterate the blocks of `content` that contain anything besides whitespace.
pub fn blocks(content: &str) -> impl Iterator<Item = &str> {
    BLOCK_SEPARATOR
        .split(content)
        .filter(|block| !block.trim().is_empty())
}
