//! The ordered registry of changelog sections.

use relnotes_core::Labelled;
use tracing::debug;

use crate::model::Section;

/// Built-in sections used when no custom sections are configured.
pub const DEFAULT_SECTIONS: &[(&str, &[&str])] = &[
    ("New Features", &["enhancement"]),
    ("Bug Fixes", &["bug", "regression"]),
    ("Documentation", &["documentation"]),
    ("Dependency Upgrades", &["dependency-upgrade"]),
];

/// An ordered, never-empty list of sections.
///
/// Position is identity: the index of a section is what the collator groups
/// by and orders on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    is_default: bool,
}

impl SectionRegistry {
    /// Build a registry from custom sections.
    ///
    /// An empty list falls back to [`DEFAULT_SECTIONS`]. A non-empty list is
    /// used as-is, in the given order, and fully replaces the defaults.
    pub fn build(custom: Vec<Section>) -> Self {
        if custom.is_empty() {
            debug!("No custom sections configured, using defaults");
            return Self::defaults();
        }
        debug!(sections = custom.len(), "Using custom sections");
        Self {
            sections: custom,
            is_default: false,
        }
    }

    /// Like [`build`](Self::build), treating `None` as "no custom sections".
    pub fn build_optional(custom: Option<Vec<Section>>) -> Self {
        Self::build(custom.unwrap_or_default())
    }

    /// The built-in registry.
    pub fn defaults() -> Self {
        Self {
            sections: DEFAULT_SECTIONS
                .iter()
                .map(|(title, labels)| Section::new(*title, labels.iter().copied()))
                .collect(),
            is_default: true,
        }
    }

    /// Whether this registry is the built-in fallback.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// All sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the registry has no sections. A built registry never does.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Index of the first section matching the item, if any.
    pub fn find<T: Labelled>(&self, item: &T) -> Option<usize> {
        self.sections.iter().position(|s| s.matches(item))
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
