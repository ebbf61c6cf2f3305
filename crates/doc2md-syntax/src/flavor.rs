//! Flavor tag renderers — trait-based dispatch from tag key to output group.
//!
//! All flavors share [`TAG_TABLE`]; they differ only in how `@param`,
//! `@return`, `@throws` and `@var` values are split and how type tokens are
//! formatted.

use crate::groups::TagGroups;
use crate::model::Tag;
use crate::normalize::{tokenize_limited, RE_WHITESPACE};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Separator between the identifier part and the description of an entry.
pub const ENTRY_SEPARATOR: &str = " — ";

static RE_PHP_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[A-Za-z0-9_$]+$").unwrap());

static RE_JS_TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{([^{}]+)\}$").unwrap());

// -- Dispatch table -----------------------------------------------------------

/// How a tag's value is turned into a group entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// No value, renders as a bare label
    Flag,
    /// Value copied verbatim
    Text,
    /// Value wrapped in a code span
    Code,
    Param,
    Exception,
    Returns,
    Var,
}

/// Tag key → (group name, rule), shared by every flavor.
pub static TAG_TABLE: &[(&str, &str, Rule)] = &[
    ("abstract", "Abstract", Rule::Flag),
    ("access", "Access", Rule::Text),
    ("author", "Author", Rule::Text),
    ("constructor", "Constructor", Rule::Flag),
    ("copyright", "Copyright", Rule::Text),
    ("deprec", "Deprecated", Rule::Flag),
    ("deprecated", "Deprecated", Rule::Flag),
    ("example", "Example", Rule::Text),
    ("exception", "Exceptions", Rule::Exception),
    ("exports", "Exports", Rule::Text),
    ("license", "License", Rule::Text),
    ("link", "Link", Rule::Text),
    ("name", "Alias", Rule::Text),
    ("package", "Package", Rule::Text),
    ("param", "Parameters", Rule::Param),
    ("private", "Private", Rule::Flag),
    ("return", "Returns", Rule::Returns),
    ("returns", "Returns", Rule::Returns),
    ("see", "See also", Rule::Text),
    ("since", "Since", Rule::Text),
    ("static", "Static", Rule::Text),
    ("subpackage", "Sub-package", Rule::Text),
    ("this", "This", Rule::Code),
    ("throws", "Exceptions", Rule::Exception),
    ("todo", "To-do", Rule::Text),
    ("var", "Type", Rule::Var),
    ("version", "Version", Rule::Text),
];

/// Look up the group and rule for a tag key. Keys match exactly.
pub(crate) fn lookup(key: &str) -> Option<(&'static str, Rule)> {
    TAG_TABLE
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, group, rule)| (*group, *rule))
}

// -- Renderers ----------------------------------------------------------------

/// Sorts tags into groups for one doc flavor.
pub trait TagRenderer {
    /// `` `t0` — t1 `` for a `@param` value.
    fn param(&self, value: &str) -> String;
    fn exception(&self, value: &str) -> String;
    fn returns(&self, value: &str) -> String;
    /// `None` when the flavor has no use for `@var`.
    fn var(&self, value: &str) -> Option<String>;

    /// Add one tag to `groups`. Unknown keys are ignored.
    fn add_tag(&self, tag: &Tag, groups: &mut TagGroups) {
        let Some((group, rule)) = lookup(&tag.key) else {
            tracing::debug!("no renderer for @{}", tag.key);
            return;
        };
        match rule {
            Rule::Flag => groups.flag(group),
            Rule::Text => groups.append(group, tag.value.as_str()),
            Rule::Code => groups.append(group, code(&tag.value)),
            Rule::Param => groups.append(group, self.param(&tag.value)),
            Rule::Exception => groups.append(group, self.exception(&tag.value)),
            Rule::Returns => groups.append(group, self.returns(&tag.value)),
            Rule::Var => {
                if let Some(entry) = self.var(&tag.value) {
                    groups.append(group, entry);
                }
            }
        }
    }

    /// Group all tags of one section.
    fn group_tags(&self, tags: &[Tag]) -> TagGroups {
        let mut groups = TagGroups::new();
        for tag in tags {
            self.add_tag(tag, &mut groups);
        }
        groups
    }
}

/// Statically typed doc comments (Javadoc). Types come from the code, so
/// tag values are taken mostly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTypes;

impl TagRenderer for StaticTypes {
    fn param(&self, value: &str) -> String {
        let [name, desc] = split_words::<2>(value);
        entry(&code(&name), &desc)
    }

    fn exception(&self, value: &str) -> String {
        self.param(value)
    }

    fn returns(&self, value: &str) -> String {
        value.to_string()
    }

    fn var(&self, _value: &str) -> Option<String> {
        None
    }
}

/// Where a dynamically typed flavor writes types and names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeConvention {
    /// `@param int $count description`
    Php,
    /// `@param {number} count description`
    Js,
}

impl TypeConvention {
    /// Format a lone type token.
    pub fn format_type(self, token: &str) -> String {
        match self {
            Self::Php => code(token),
            Self::Js => match RE_JS_TYPE.captures(token) {
                Some(caps) => code(&caps[1]),
                None => code(token),
            },
        }
    }

    /// Format a `(type, name)` pair, or `None` when the tokens do not follow
    /// the convention.
    pub fn format_type_and_name(self, type_token: &str, name: &str) -> Option<String> {
        match self {
            Self::Php if RE_PHP_VARIABLE.is_match(name) => {
                Some(format!("{}{}{}", code(name), ENTRY_SEPARATOR, code(type_token)))
            }
            Self::Js => RE_JS_TYPE
                .captures(type_token)
                .map(|caps| format!("{}{}{}", code(name), ENTRY_SEPARATOR, code(&caps[1]))),
            Self::Php => None,
        }
    }
}

/// Dynamically typed doc comments (PHPDoc, JSDoc), which carry type tokens
/// inside tag values.
#[derive(Debug, Clone, Copy)]
pub struct DynamicTypes {
    pub convention: TypeConvention,
}

impl DynamicTypes {
    fn typed(&self, value: &str) -> String {
        let [type_token, desc] = split_words::<2>(value);
        entry(&self.convention.format_type(&type_token), &desc)
    }
}

impl TagRenderer for DynamicTypes {
    fn param(&self, value: &str) -> String {
        let [type_token, name, desc] = split_words::<3>(value);
        match self.convention.format_type_and_name(&type_token, &name) {
            Some(head) => entry(&head, &desc),
            // only a name where the type should be
            None => {
                let [name, desc] = split_words::<2>(value);
                entry(&code(&name), &desc)
            }
        }
    }

    fn exception(&self, value: &str) -> String {
        self.typed(value)
    }

    fn returns(&self, value: &str) -> String {
        self.typed(value)
    }

    fn var(&self, value: &str) -> Option<String> {
        Some(self.typed(value))
    }
}

// -- Flavor -------------------------------------------------------------------

/// Supported doc comment dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    #[default]
    Javadoc,
    PhpDoc,
    JsDoc,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Doc2MdError {
    #[error("unknown flavor: {0}. Use javadoc, phpdoc, or jsdoc")]
    UnknownFlavor(String),
}

impl Flavor {
    /// Create the tag renderer for this flavor.
    pub fn renderer(self) -> Box<dyn TagRenderer> {
        match self {
            Self::Javadoc => Box::new(StaticTypes),
            Self::PhpDoc => Box::new(DynamicTypes {
                convention: TypeConvention::Php,
            }),
            Self::JsDoc => Box::new(DynamicTypes {
                convention: TypeConvention::Js,
            }),
        }
    }

    /// Source file extension conventionally documented with this flavor.
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Javadoc => "java",
            Self::PhpDoc => "php",
            Self::JsDoc => "js",
        }
    }
}

impl FromStr for Flavor {
    type Err = Doc2MdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javadoc" | "java" => Ok(Self::Javadoc),
            "phpdoc" | "php" => Ok(Self::PhpDoc),
            "jsdoc" | "js" => Ok(Self::JsDoc),
            _ => Err(Doc2MdError::UnknownFlavor(s.to_string())),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Javadoc => "javadoc",
            Self::PhpDoc => "phpdoc",
            Self::JsDoc => "jsdoc",
        })
    }
}

// -- Helpers ------------------------------------------------------------------

fn code(text: &str) -> String {
    format!("`{}`", text)
}

/// `head — desc`, or just `head` when there is no description.
fn entry(head: &str, desc: &str) -> String {
    if desc.is_empty() {
        head.to_string()
    } else {
        format!("{}{}{}", head, ENTRY_SEPARATOR, desc)
    }
}

fn split_words<const N: usize>(value: &str) -> [String; N] {
    let mut tokens = tokenize_limited(value, &RE_WHITESPACE, N).into_iter();
    std::array::from_fn(|_| tokens.next().unwrap_or_default())
}
