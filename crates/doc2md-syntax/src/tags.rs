//! Doc comment parser — splits a comment body into its description and its
//! `@tag value` entries.

use crate::model::{ParsedDoc, Tag};
use crate::normalize::strip_comment_prefix;
use crate::reflow::{is_fence, reflow, TAG_INDENT};
use regex::Regex;
use std::sync::LazyLock;

// A tag line: `@name` (letters only) and whatever follows on the same line.
static RE_TAG_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*@([A-Za-z]+)(.*)$").unwrap());

/// Parse a section's raw comment body.
pub fn parse_doc(raw_doc: &str) -> ParsedDoc {
    let mut description: Vec<&str> = Vec::new();
    let mut chunks: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut in_fence = false;

    for line in comment_lines(raw_doc) {
        if is_fence(line) {
            in_fence = !in_fence;
        } else if !in_fence {
            if let Some(caps) = RE_TAG_START.captures(line) {
                let key = caps.get(1).map_or("", |m| m.as_str());
                let rest = caps.get(2).map_or("", |m| m.as_str());
                chunks.push((key, vec![rest]));
                continue;
            }
        }
        match chunks.last_mut() {
            Some((_, lines)) => lines.push(line),
            None => description.push(line),
        }
    }

    ParsedDoc {
        description: format_description(description),
        tags: chunks
            .into_iter()
            .map(|(key, lines)| Tag::new(key, reflow(lines, TAG_INDENT)))
            .collect(),
    }
}

/// Render the free-text lines before the first tag as Markdown prose.
pub fn format_description<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    reflow(lines, "")
}

/// Physical comment lines with their `*` marker removed. Marker-less lines
/// are kept unless blank.
fn comment_lines(raw_doc: &str) -> impl Iterator<Item = &str> {
    raw_doc
        .split('\n')
        .filter_map(|line| match strip_comment_prefix(line) {
            Some(rest) => Some(rest),
            None if line.trim().is_empty() => None,
            None => Some(line),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_only() {
        let doc = parse_doc("\n * Returns the x coordinate.\n * <p>\n * Never negative.\n ");
        assert_eq!(doc.description, "Returns the x coordinate.\n\nNever negative.");
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn description_and_tags() {
        let doc = parse_doc(
            "\n * Moves the point.\n *\n * @param dx horizontal offset\n * @param dy vertical\n *     offset\n * @return the moved point\n ",
        );
        assert_eq!(doc.description, "Moves the point.");
        assert_eq!(
            doc.tags,
            vec![
                Tag::new("param", "dx horizontal offset"),
                Tag::new("param", "dy vertical offset"),
                Tag::new("return", "the moved point"),
            ]
        );
    }

    #[test]
    fn first_line_after_opener_is_kept() {
        let doc = parse_doc(" Summary line\n * more text\n ");
        assert_eq!(doc.description, "Summary line more text");
    }

    #[test]
    fn flag_tag_has_empty_value() {
        let doc = parse_doc("\n * @deprecated\n ");
        assert_eq!(doc.tags, vec![Tag::new("deprecated", "")]);
    }

    #[test]
    fn fenced_example_is_kept_verbatim() {
        let doc = parse_doc("\n * @example\n * ```\n * foo();\n * ```\n ");
        assert_eq!(doc.tags, vec![Tag::new("example", "```\nfoo();\n```")]);
    }

    #[test]
    fn at_lines_inside_fences_do_not_start_tags() {
        let doc = parse_doc(
            "\n * @example\n * ```\n * @Override\n * void run() {}\n * ```\n * @since 1.2\n ",
        );
        assert_eq!(doc.tags.len(), 2);
        assert_eq!(doc.tags[0].value, "```\n@Override\nvoid run() {}\n```");
        assert_eq!(doc.tags[1], Tag::new("since", "1.2"));
    }

    #[test]
    fn unknown_tags_are_preserved() {
        let doc = parse_doc("\n * @customTag some value\n ");
        assert_eq!(doc.tags, vec![Tag::new("customTag", "some value")]);
    }

    #[test]
    fn at_without_letters_is_not_a_tag() {
        let doc = parse_doc("\n * Contact\n * @2x scale\n ");
        assert_eq!(doc.description, "Contact @2x scale");
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn tag_value_with_list() {
        let doc = parse_doc("\n * @param mode one of:\n * - fast\n * - safe\n ");
        assert_eq!(doc.tags[0].value, "mode one of:\n\n     - fast\n     - safe");
    }
}
