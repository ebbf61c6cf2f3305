//! Tag groups — the named output buckets a section's tags are sorted into.

use indexmap::IndexMap;

/// Insertion-ordered map from group name to its entries.
///
/// A `None` entry marks a flag-style tag (`@deprecated`, `@private`, ...)
/// that renders as a bare label.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagGroups {
    groups: IndexMap<&'static str, Vec<Option<String>>>,
}

impl TagGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rendered entry, creating the group on first use.
    pub fn append(&mut self, group: &'static str, entry: impl Into<String>) {
        self.groups.entry(group).or_default().push(Some(entry.into()));
    }

    /// Record a flag-style tag.
    pub fn flag(&mut self, group: &'static str) {
        self.groups.entry(group).or_default().push(None);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, group: &str) -> Option<&[Option<String>]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Groups in the order their first entry was added.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[Option<String>])> + '_ {
        self.groups.iter().map(|(name, entries)| (*name, entries.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_insertion_order() {
        let mut groups = TagGroups::new();
        groups.append("Parameters", "`a` — first");
        groups.append("Returns", "the sum");
        groups.append("Parameters", "`b` — second");
        groups.flag("Deprecated");

        let names: Vec<&str> = groups.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Parameters", "Returns", "Deprecated"]);
        assert_eq!(groups.get("Parameters").map(<[_]>::len), Some(2));
        assert_eq!(groups.get("Deprecated"), Some(&[None][..]));
    }

    #[test]
    fn empty_groups() {
        let groups = TagGroups::new();
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
        assert_eq!(groups.get("Returns"), None);
    }
}
