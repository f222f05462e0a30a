//! Quoting rules for catalog string literals.

/// Escaped strings at least this long are written in the multi-line form.
pub const WRAP_THRESHOLD: usize = 70;

/// Extract the content of one quoted fragment (`"..."`).
///
/// The surrounding whitespace is dropped. Unquoted input is returned trimmed
/// and otherwise untouched.
pub fn unquote(fragment: &str) -> String {
    let trimmed = fragment.trim();
    match trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => unescape(inner),
        // A lone `"` is both the opening and the closing quote.
        None if trimmed == "\"" => String::new(),
        None => trimmed.to_string(),
    }
}

/// Resolve `\n`, `\t`, `\"` and `\\`. Other sequences are kept as written.
///
/// Single left-to-right pass, so an escaped backslash is never re-read as the
/// start of another sequence.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Escape backslash, quote and tab. Newlines are left for [`format_string`].
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\t', "\\t")
}

/// Render a value as the quoted lines that follow a `msgstr` keyword.
///
/// Short single-line values stay on one line. Anything else starts with an
/// empty `""` line followed by one line per logical line, each but the last
/// ending in `\n`. An empty trailing logical line is not written.
pub fn format_string(s: &str) -> Vec<String> {
    let escaped = escape(s);
    let lines: Vec<&str> = escaped.split('\n').collect();

    if lines.len() == 1 && escaped.chars().count() < WRAP_THRESHOLD {
        return vec![format!("\"{}\"", escaped)];
    }

    let mut result = vec!["\"\"".to_string()];
    let last = lines.len() - 1;
    for (i, line) in lines.iter().enumerate() {
        if i < last {
            result.push(format!("\"{}\\n\"", line));
        } else if !line.is_empty() {
            result.push(format!("\"{}\"", line));
        }
    }
    result
}
