//! doc2md-syntax — turn Javadoc, PHPDoc and JSDoc comments into Markdown.
//!
//! The pipeline runs in one pass over an in-memory source string:
//!
//! 1. **Sections** — pair every `/** … */` comment with the declaration after it
//! 2. **Tags** — split each comment into a description and `@tag value` entries
//! 3. **Flavor** — sort tags into named groups (`Parameters`, `Returns`, ...)
//! 4. **Markdown** — emit a heading per declaration, then the description and groups
//!
//! Nothing here performs I/O or fails; malformed input degrades to less output.

pub mod flavor;
pub mod groups;
pub mod markdown;
pub mod model;
pub mod normalize;
pub mod reflow;
pub mod section;
pub mod tags;

pub use flavor::{Doc2MdError, DynamicTypes, Flavor, StaticTypes, TagRenderer, TypeConvention};
pub use groups::TagGroups;
pub use markdown::{render, render_section, render_with};
pub use model::{DeclarationKind, ParsedDoc, Section, Tag};
pub use section::{field_declaration, sections, SectionScanner};
pub use tags::parse_doc;

/// Markdown from Javadoc comments.
pub fn render_javadoc(source: &str, base_level: usize) -> String {
    render(source, Flavor::Javadoc, base_level)
}

/// Markdown from PHPDoc comments.
pub fn render_phpdoc(source: &str, base_level: usize) -> String {
    render(source, Flavor::PhpDoc, base_level)
}

/// Markdown from JSDoc comments.
pub fn render_jsdoc(source: &str, base_level: usize) -> String {
    render(source, Flavor::JsDoc, base_level)
}
