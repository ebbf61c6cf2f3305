//! Line-wrap reconstruction — turns the physical lines of a doc comment back
//! into Markdown text.
//!
//! Prose lines are flowed into paragraphs, list items keep a line each and
//! fenced code blocks are copied as they are. The same machine serves tag
//! values (indented so continuations stay inside a bullet) and descriptions
//! (no indent).

use crate::normalize::{clean_line, replace_html_with_markdown};
use crate::section::PARAGRAPH_MARKER;
use regex::Regex;
use std::sync::LazyLock;

/// Indent for continuation lines of a tag value.
pub const TAG_INDENT: &str = "     ";

static RE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*```").unwrap());

static RE_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(?:[-+*]|[0-9]+\.)[ \t]+\S").unwrap());

static RE_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?p>").unwrap());

/// Whether `line` opens or closes a fenced code block.
pub fn is_fence(line: &str) -> bool {
    RE_FENCE.is_match(line)
}

/// Whether `line` is a bullet or numbered list item.
pub fn is_list_item(line: &str) -> bool {
    RE_LIST_ITEM.is_match(line)
}

#[derive(Debug, Default)]
struct ReflowState {
    code_block: bool,
    list_block: bool,
    new_list: bool,
}

/// Accumulates one multi-line value. Create a fresh one per value.
#[derive(Debug)]
pub struct Reflow<'i> {
    indent: &'i str,
    state: ReflowState,
    out: String,
}

impl<'i> Reflow<'i> {
    pub fn new(indent: &'i str) -> Self {
        Self {
            indent,
            state: ReflowState::default(),
            out: String::new(),
        }
    }

    /// Feed the next physical line (comment marker already stripped).
    pub fn push_line(&mut self, line: &str) {
        if is_fence(line) {
            self.state.code_block = !self.state.code_block;
            self.state.list_block = false;
            self.state.new_list = false;
            if self.state.code_block {
                self.start_line(false);
            }
            self.out.push_str(line.trim());
            self.out.push('\n');
            return;
        }

        if self.state.code_block {
            if line.trim() != PARAGRAPH_MARKER {
                // one space is the comment's own separator, the rest is code
                self.out.push_str(line.strip_prefix(' ').unwrap_or(line));
            }
            self.out.push('\n');
            return;
        }

        if is_list_item(line) {
            self.state.new_list = !self.state.list_block;
            self.state.list_block = true;
            self.start_line(self.state.new_list);
            self.out.push_str(self.indent);
            self.out.push_str(&replace_html_with_markdown(&clean_line(line)));
            return;
        }

        if self.state.list_block {
            self.paragraph_break();
        }
        self.state.list_block = false;
        self.state.new_list = false;
        self.push_prose(line);
    }

    pub fn finish(self) -> String {
        self.out.trim_end().to_string()
    }

    /// Flow a prose line onto the buffer; `<p>` markers split paragraphs.
    fn push_prose(&mut self, line: &str) {
        let text = replace_html_with_markdown(&clean_line(line));
        for (i, piece) in RE_PARAGRAPH.split(&text).enumerate() {
            if i > 0 {
                self.paragraph_break();
            }
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            if !self.out.is_empty() && !self.out.ends_with(char::is_whitespace) {
                self.out.push(' ');
            }
            self.out.push_str(piece);
        }
    }

    fn paragraph_break(&mut self) {
        self.trim_trailing();
        if self.out.is_empty() {
            return;
        }
        self.out.push_str("\n\n");
        self.out.push_str(self.indent);
    }

    /// Move to a fresh line unless nothing has been written yet.
    fn start_line(&mut self, blank: bool) {
        self.trim_trailing();
        if self.out.is_empty() {
            return;
        }
        self.out.push('\n');
        if blank {
            self.out.push('\n');
        }
    }

    fn trim_trailing(&mut self) {
        let len = self.out.trim_end().len();
        self.out.truncate(len);
    }
}

/// Rebuild `lines` into one value using `indent` for continuation lines.
pub fn reflow<'a>(lines: impl IntoIterator<Item = &'a str>, indent: &str) -> String {
    let mut reflow = Reflow::new(indent);
    for line in lines {
        reflow.push_line(line);
    }
    reflow.finish()
}
