//! Markdown assembly — one heading block per documented declaration,
//! stitched into a single document.

use crate::flavor::{Flavor, TagRenderer};
use crate::model::{DeclarationKind, Section};
use crate::reflow::is_fence;
use crate::section::sections;
use crate::tags::parse_doc;

/// Title of the top-level heading of every document.
pub const DOCUMENT_TITLE: &str = "Documentation";

/// Deepest heading Markdown supports.
const MAX_HEADING_LEVEL: usize = 6;

/// Render all doc comments in `source` with the given flavor. `base_level` is
/// the level of the document heading; sections start one level below.
pub fn render(source: &str, flavor: Flavor, base_level: usize) -> String {
    let renderer = flavor.renderer();
    render_with(source, renderer.as_ref(), base_level)
}

/// Like [`render`], with a caller-supplied tag renderer.
pub fn render_with(source: &str, renderer: &dyn TagRenderer, base_level: usize) -> String {
    let mut level = base_level;
    let mut output = format!("{} {}", heading_marker(level), DOCUMENT_TITLE);

    for section in sections(source) {
        output.push_str(&render_section(&section, level, renderer));
        // Members of a class nest one level deeper; nothing ever closes a scope.
        if section.kind() == DeclarationKind::Class {
            level = level.saturating_add(1);
        }
    }

    output.push('\n');
    output
}

/// Render one section at `level`; its heading sits one level below.
/// Empty when the declaration has nothing to put in a heading.
pub fn render_section(section: &Section, level: usize, renderer: &dyn TagRenderer) -> String {
    let field = section.field();
    if field.is_empty() {
        tracing::debug!("no field declaration in {:?}", section.declaration);
        return String::new();
    }

    tracing::debug!("rendering {:?} `{}`", section.kind(), field);
    let doc = parse_doc(&section.raw_doc);
    let mut output = format!("\n\n{} `{}`", heading_marker(level.saturating_add(1)), field);

    if !doc.description.is_empty() {
        output.push_str("\n\n");
        output.push_str(&doc.description);
    }

    let groups = renderer.group_tags(&doc.tags);
    if !groups.is_empty() {
        output.push('\n');
        for (name, entries) in groups.iter() {
            output.push_str(&render_group(name, entries));
        }
    }

    output
}

/// Render one tag group as a bullet.
///
/// - flags only: `* **Deprecated**`
/// - one entry: `* **Returns:** the sum`
/// - several entries: `* **Parameters:**` followed by nested bullets
fn render_group(name: &str, entries: &[Option<String>]) -> String {
    let values: Vec<&str> = entries.iter().flatten().map(String::as_str).collect();
    if values.is_empty() {
        return format!("\n * **{}**", name);
    }

    let mut output = format!("\n * **{}:**", name);
    if let [value] = values.as_slice() {
        push_entry(&mut output, value);
    } else {
        for value in &values {
            output.push_str("\n   *");
            push_entry(&mut output, value);
        }
    }
    output
}

fn push_entry(output: &mut String, value: &str) {
    if value.is_empty() {
        return;
    }
    // a fence only opens a code block at the start of a line
    output.push(if is_fence(value) { '\n' } else { ' ' });
    output.push_str(value);
}

/// `#` run for a heading at `level`, clamped to what Markdown renders.
pub fn heading_marker(level: usize) -> String {
    "#".repeat(level.clamp(1, MAX_HEADING_LEVEL))
}
