//! `_index.md` — links from every documented source file to its page.

use doc2md_syntax::markdown::DOCUMENT_TITLE;
use std::path::{Component, Path, PathBuf};

pub const INDEX_FILE: &str = "_index.md";

/// One generated page.
#[derive(Debug)]
pub struct IndexEntry {
    /// Source path relative to the scanned directory
    pub source: PathBuf,
    /// Markdown path relative to the output directory
    pub target: PathBuf,
}

/// Render the index page, one bullet per entry in the given order.
pub fn render_index(entries: &[IndexEntry]) -> String {
    let mut output = format!("\n# {}\n\n", DOCUMENT_TITLE);
    for entry in entries {
        output.push_str(&format!(
            " * [{} doc]({})\n",
            link_path(&entry.source),
            link_path(&entry.target)
        ));
    }
    output
}

/// Forward-slash form of a relative path, as Markdown links expect.
fn link_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lists_entries_in_order() {
        let entries = vec![
            IndexEntry {
                source: PathBuf::from("Shape.java"),
                target: PathBuf::from("Shape.md"),
            },
            IndexEntry {
                source: PathBuf::from("geo/Point.java"),
                target: PathBuf::from("geo/Point.md"),
            },
        ];
        assert_eq!(
            render_index(&entries),
            "\n# Documentation\n\n * [Shape.java doc](Shape.md)\n * [geo/Point.java doc](geo/Point.md)\n"
        );
    }

    #[test]
    fn empty_index() {
        assert_eq!(render_index(&[]), "\n# Documentation\n\n");
    }
}
