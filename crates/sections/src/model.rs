//! Section data model.

use std::collections::BTreeSet;

use relnotes_core::Labelled;

/// A single changelog section: a heading and the labels that select it.
///
/// Sections are compared by position in their registry, not by content;
/// two sections with identical labels are still distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Display title for the section heading.
    pub title: String,

    /// Trigger labels (case-sensitive). An empty set never matches.
    pub labels: BTreeSet<String>,
}

impl Section {
    /// Create a section from a title and any collection of labels.
    /// Duplicate labels collapse.
    pub fn new<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Does the item carry at least one of this section's labels?
    pub fn matches<T: Labelled>(&self, item: &T) -> bool {
        if self.labels.is_empty() {
            return false;
        }
        item.label_names().any(|name| self.labels.contains(name))
    }
}
