//! Line normalisation helpers shared by every stage of the pipeline.

use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_SPACE_AROUND_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *([\n\r\t]) *").unwrap());

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

static RE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r\t]").unwrap());

static RE_CODE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*code\s*>(.*?)<\s*/\s*code\s*>").unwrap());

static RE_COMMENT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\*").unwrap());

/// Whitespace runs, the separator used to split tag values into tokens.
pub static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// -- Public API ---------------------------------------------------------------

/// Trim a line, drop spaces around line breaks and tabs, and collapse runs of
/// spaces into one.
pub fn clean_line(line: &str) -> String {
    let line = RE_SPACE_AROUND_BREAK.replace_all(line.trim(), "$1");
    RE_MULTI_SPACE.replace_all(&line, " ").into_owned()
}

/// Like [`clean_line`], but the result is a single line: breaks and tabs
/// become spaces.
pub fn clean_single_line(line: &str) -> String {
    clean_line(&RE_BREAK.replace_all(line, " "))
}

/// Convert inline `<code>…</code>` markup to Markdown code spans.
pub fn replace_html_with_markdown(html: &str) -> String {
    RE_CODE_TAG.replace_all(html, "`$1`").into_owned()
}

/// Strip the leading `*` of a doc comment line, together with the
/// indentation before it. Returns `None` for lines without the marker.
pub fn strip_comment_prefix(line: &str) -> Option<&str> {
    RE_COMMENT_PREFIX.find(line).map(|m| &line[m.end()..])
}

/// Split `s` on `separator` into exactly `limit` tokens.
///
/// The last token holds the unsplit remainder. Missing positions are padded
/// with empty strings, so callers can always index `0..limit`.
pub fn tokenize_limited(s: &str, separator: &Regex, limit: usize) -> Vec<String> {
    let mut tokens: Vec<String> = separator
        .splitn(s, limit.max(1))
        .map(str::to_string)
        .collect();
    tokens.resize(limit, String::new());
    tokens
}
