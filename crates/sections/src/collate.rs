//! Collation of issues into registry-ordered section groups.
//!
//! Each issue goes to the first section (lowest registry index) that shares
//! a label with it. Groups come back ordered by section index, and each
//! group keeps its issues in input order.

use std::collections::BTreeMap;

use relnotes_core::Labelled;
use tracing::debug;

use crate::model::Section;
use crate::registry::SectionRegistry;

/// Issues that landed in one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'r, T> {
    index: usize,
    section: &'r Section,
    issues: Vec<T>,
}

impl<'r, T> Group<'r, T> {
    /// Position of the section in its registry.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn section(&self) -> &'r Section {
        self.section
    }

    pub fn title(&self) -> &'r str {
        &self.section.title
    }

    /// Member issues in input order. Never empty.
    pub fn issues(&self) -> &[T] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<T> {
        self.issues
    }
}

/// The result of [`collate`]: non-empty groups in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collated<'r, T> {
    groups: Vec<Group<'r, T>>,
}

impl<'r, T> Collated<'r, T> {
    pub fn iter(&self) -> std::slice::Iter<'_, Group<'r, T>> {
        self.groups.iter()
    }

    /// Number of non-empty groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of issues across all groups.
    pub fn issue_count(&self) -> usize {
        self.groups.iter().map(|g| g.issues.len()).sum()
    }

    /// The first group whose section has the given title.
    pub fn get(&self, title: &str) -> Option<&Group<'r, T>> {
        self.groups.iter().find(|g| g.section.title == title)
    }

    pub fn into_groups(self) -> Vec<Group<'r, T>> {
        self.groups
    }
}

impl<'r, T> IntoIterator for Collated<'r, T> {
    type Item = Group<'r, T>;
    type IntoIter = std::vec::IntoIter<Group<'r, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, 'r, T> IntoIterator for &'a Collated<'r, T> {
    type Item = &'a Group<'r, T>;
    type IntoIter = std::slice::Iter<'a, Group<'r, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group issues by the first matching section of `registry`.
///
/// Unmatched issues, including those with no labels, are dropped. Accepts
/// owned issues or references (`&[Issue]`, `Vec<&Issue>`, ...).
pub fn collate<'r, I, T>(registry: &'r SectionRegistry, issues: I) -> Collated<'r, T>
where
    I: IntoIterator<Item = T>,
    T: Labelled,
{
    let mut buckets: BTreeMap<usize, Vec<T>> = BTreeMap::new();
    for issue in issues {
        if let Some(index) = registry.find(&issue) {
            buckets.entry(index).or_default().push(issue);
        }
    }

    let groups: Vec<Group<'r, T>> = buckets
        .into_iter()
        .filter_map(|(index, issues)| {
            registry.get(index).map(|section| Group {
                index,
                section,
                issues,
            })
        })
        .collect();

    let collated = Collated { groups };
    debug!(
        groups = collated.len(),
        issues = collated.issue_count(),
        "Collated issues into sections"
    );
    collated
}

#[cfg(test)]
mod tests {
    use super::*;
    use relnotes_core::Issue;

    fn issue(number: u64, labels: &[&str]) -> Issue {
        Issue::new(number, format!("Issue {number}")).with_labels(labels.iter().copied())
    }

    fn numbers<T: std::borrow::Borrow<Issue>>(group: &Group<'_, T>) -> Vec<u64> {
        group.issues().iter().map(|i| i.borrow().number).collect()
    }

    fn features_and_fixes() -> SectionRegistry {
        SectionRegistry::build(vec![
            Section::new("Features", ["enhancement"]),
            Section::new("Fixes", ["bug"]),
        ])
    }

    #[test]
    fn features_and_fixes_scenario() {
        let registry = features_and_fixes();
        let issues = vec![
            issue(1, &["bug"]),
            issue(2, &["enhancement", "bug"]),
            issue(3, &["docs"]),
        ];

        let collated = collate(&registry, &issues);
        assert_eq!(collated.len(), 2);

        let titles: Vec<_> = collated.iter().map(|g| g.title()).collect();
        assert_eq!(titles, ["Features", "Fixes"]);
        assert_eq!(numbers(collated.get("Features").unwrap()), vec![2]);
        assert_eq!(numbers(collated.get("Fixes").unwrap()), vec![1]);
        assert!(
            collated
                .iter()
                .all(|g| g.issues().iter().all(|i| i.number != 3))
        );
    }

    #[test]
    fn empty_issue_list_yields_empty_result() {
        let registry = SectionRegistry::defaults();
        let collated = collate(&registry, Vec::<Issue>::new());
        assert!(collated.is_empty());
        assert_eq!(collated.issue_count(), 0);
    }

    #[test]
    fn single_section_without_matches_is_empty() {
        let registry = SectionRegistry::build(vec![Section::new("Only", ["only"])]);
        let collated = collate(&registry, vec![issue(1, &["bug"]), issue(2, &[])]);
        assert!(collated.is_empty());
    }

    #[test]
    fn first_declared_section_wins() {
        let registry = SectionRegistry::build(vec![
            Section::new("A", ["shared"]),
            Section::new("B", ["shared", "b"]),
        ]);
        let collated = collate(&registry, vec![issue(1, &["b", "shared"])]);
        assert_eq!(collated.len(), 1);
        assert_eq!(collated.iter().next().unwrap().title(), "A");
    }

    #[test]
    fn sections_with_identical_labels_stay_distinct() {
        let registry = SectionRegistry::build(vec![
            Section::new("First", ["bug"]),
            Section::new("First", ["bug"]),
        ]);
        let collated = collate(&registry, vec![issue(1, &["bug"]), issue(2, &["bug"])]);
        assert_eq!(collated.len(), 1);
        let group = collated.iter().next().unwrap();
        assert_eq!(group.index(), 0);
        assert_eq!(numbers(group), vec![1, 2]);
    }

    #[test]
    fn group_order_follows_registry_not_input() {
        let registry = SectionRegistry::defaults();
        let issues = vec![
            issue(1, &["dependency-upgrade"]),
            issue(2, &["documentation"]),
            issue(3, &["regression"]),
            issue(4, &["enhancement"]),
        ];
        let collated = collate(&registry, &issues);
        let indices: Vec<_> = collated.iter().map(|g| g.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);

        let titles: Vec<_> = collated.iter().map(|g| g.title()).collect();
        assert_eq!(
            titles,
            ["New Features", "Bug Fixes", "Documentation", "Dependency Upgrades"]
        );
    }

    #[test]
    fn group_order_independent_of_input_permutation() {
        let registry = SectionRegistry::defaults();
        let mut issues = vec![
            issue(1, &["bug"]),
            issue(2, &["enhancement"]),
            issue(3, &["documentation"]),
        ];
        for _ in 0..issues.len() {
            issues.rotate_left(1);
            let collated = collate(&registry, &issues);
            let indices: Vec<_> = collated.iter().map(|g| g.index()).collect();
            assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn issues_keep_input_order_within_group() {
        let registry = features_and_fixes();
        let issues = vec![
            issue(9, &["bug"]),
            issue(3, &["enhancement"]),
            issue(5, &["bug"]),
            issue(1, &["bug"]),
        ];
        let collated = collate(&registry, &issues);
        assert_eq!(numbers(collated.get("Fixes").unwrap()), vec![9, 5, 1]);
    }

    #[test]
    fn every_issue_accounted_for_exactly_once() {
        let registry = SectionRegistry::defaults();
        let issues = vec![
            issue(1, &["bug", "enhancement"]),
            issue(2, &[]),
            issue(3, &["documentation", "bug"]),
            issue(4, &["question"]),
            issue(5, &["dependency-upgrade"]),
            issue(6, &["regression", "documentation"]),
        ];
        let collated = collate(&registry, &issues);

        let mut grouped: Vec<u64> = collated.iter().flat_map(|g| numbers(g)).collect();
        let unmatched: Vec<u64> = issues
            .iter()
            .filter(|i| registry.find(i).is_none())
            .map(|i| i.number)
            .collect();
        assert_eq!(unmatched, vec![2, 4]);

        grouped.extend(unmatched);
        grouped.sort_unstable();
        assert_eq!(grouped, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_trigger_section_collects_nothing() {
        let registry = SectionRegistry::build(vec![
            Section::new("Never", Vec::<String>::new()),
            Section::new("Fixes", ["bug"]),
        ]);
        let collated = collate(&registry, vec![issue(1, &["bug"]), issue(2, &["anything"])]);
        assert!(collated.get("Never").is_none());
        assert_eq!(collated.len(), 1);
        assert_eq!(collated.iter().next().unwrap().index(), 1);
    }

    #[test]
    fn owned_issues_pass_through_unchanged() {
        let registry = features_and_fixes();
        let original = issue(7, &["enhancement"]).with_url("https://example.com/7");
        let groups = collate(&registry, vec![original.clone()]).into_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].section().title, "Features");
        assert_eq!(groups[0].clone().into_issues(), vec![original]);
    }
}
