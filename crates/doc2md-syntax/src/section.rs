//! Section extraction — pairs every `/** … */` comment with the declaration
//! that follows it.

use crate::model::{DeclarationKind, Section};
use crate::normalize::clean_single_line;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// Doc comment body (non-greedy) followed by the declaration head, which ends
// before the next `{`, `;` or `/`.
static RE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/([^{;/]+)").unwrap());

static RE_IMPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^import\s+").unwrap());

// A line holding only its `*` marker, i.e. a blank comment line.
static RE_BLANK_COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)\*[ \t]*$").unwrap());

static RE_FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^{;]+").unwrap());

static RE_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:package|namespace)\s+").unwrap());

static RE_TYPE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(?:class|interface|enum|trait)\s+\S").unwrap());

/// Paragraph marker substituted for blank comment lines.
pub const PARAGRAPH_MARKER: &str = "<p>";

// -- Scanner ------------------------------------------------------------------

/// Lazy iterator over the sections of one source text.
///
/// Matching resumes at the end of the previous match, so the sequence is
/// finite and each comment is consumed at most once.
pub struct SectionScanner<'a> {
    source: Cow<'a, str>,
    cursor: usize,
}

impl<'a> SectionScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let source = if source.contains("\r\n") {
            Cow::Owned(source.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(source)
        };
        Self { source, cursor: 0 }
    }
}

impl Iterator for SectionScanner<'_> {
    type Item = Section;

    fn next(&mut self) -> Option<Section> {
        loop {
            let caps = RE_SECTION.captures_at(&self.source, self.cursor)?;
            let whole = caps.get(0)?;
            self.cursor = whole.end();

            let declaration = caps[2].trim();
            if RE_IMPORT.is_match(declaration) {
                tracing::debug!("skipping import section: {}", declaration);
                continue;
            }

            return Some(Section {
                declaration: declaration.to_string(),
                raw_doc: prepare_doc(&caps[1]),
            });
        }
    }
}

/// Scan `source` for documented declarations, in document order.
pub fn sections(source: &str) -> SectionScanner<'_> {
    SectionScanner::new(source)
}

/// Bring a raw comment body into the `*`-prefixed line shape the tag parser
/// expects, turning blank comment lines into paragraph markers.
fn prepare_doc(body: &str) -> String {
    let body = if body.contains('*') {
        Cow::Borrowed(body)
    } else {
        Cow::Owned(format!("*{}", body))
    };
    RE_BLANK_COMMENT_LINE
        .replace_all(&body, format!("${{1}}* {}", PARAGRAPH_MARKER).as_str())
        .into_owned()
}

// -- Declarations -------------------------------------------------------------

/// The part of a declaration worth a heading: everything before the first
/// `{` or `;`, folded onto one line. Empty when nothing is left.
pub fn field_declaration(declaration: &str) -> String {
    RE_FIELD
        .find(declaration)
        .map(|m| clean_single_line(m.as_str()))
        .unwrap_or_default()
}

impl DeclarationKind {
    /// Classify a trimmed declaration line.
    pub fn of(declaration: &str) -> Self {
        let head = declaration.trim();
        if RE_PACKAGE.is_match(head) {
            return Self::Package;
        }
        let before_params = head.split('(').next().unwrap_or(head);
        if RE_TYPE_KEYWORD.is_match(before_params) {
            return Self::Class;
        }
        if head.contains('(') && head.contains(')') {
            if head.contains('=') && head.contains("new") {
                return Self::Field;
            }
            return Self::Method;
        }
        Self::Field
    }
}

impl Section {
    pub fn kind(&self) -> DeclarationKind {
        DeclarationKind::of(&self.declaration)
    }

    pub fn field(&self) -> String {
        field_declaration(&self.declaration)
    }
}
