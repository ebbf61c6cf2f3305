//! Data model for extracted documentation — flavor-agnostic.

/// One doc comment together with the declaration it documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Trimmed source text after the comment, up to the first `{`, `;` or `/`
    pub declaration: String,
    /// Comment body, `*` line prefixes included
    pub raw_doc: String,
}

/// What a declaration line appears to declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Method,
    Field,
    Package,
}

/// A single `@key value` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name without `@`, as written
    pub key: String,
    /// Rebuilt value; may span several lines
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parsed doc comment: leading description plus tags in source order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub description: String,
    pub tags: Vec<Tag>,
}
