//! Issue and pull-request payloads as consumed from the GitHub issues API.
//!
//! Only the label names matter for classification; everything else rides
//! along untouched so the renderer can use it.

use serde::{Deserialize, Deserializer, Serialize};

/// Anything that carries a set of label names.
///
/// Label comparison is case-sensitive. An item yielding no names never
/// matches any changelog section.
pub trait Labelled {
    /// The item's label names, in no particular order.
    fn label_names(&self) -> impl Iterator<Item = &str>;
}

impl<T: Labelled> Labelled for &T {
    fn label_names(&self) -> impl Iterator<Item = &str> {
        (**self).label_names()
    }
}

/// A single issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number within its repository.
    pub number: u64,

    /// Issue title.
    #[serde(default)]
    pub title: String,

    /// Browser URL of the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    /// Author of the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Labels applied to the issue. A missing or `null` list reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<Label>,

    /// Present when the item is a pull request rather than a plain issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
}

impl Issue {
    /// Create an issue with no labels.
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            html_url: None,
            user: None,
            labels: Vec::new(),
            pull_request: None,
        }
    }

    /// Builder: replace the label list.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Label::new).collect();
        self
    }

    /// Builder: set the browser URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = Some(url.into());
        self
    }

    /// Whether this item is a pull request.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Whether the issue carries the given label (case-sensitive).
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }
}

impl Labelled for Issue {
    fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.name.as_str())
    }
}

/// A label attached to an issue.
///
/// Deserializes from either the API object form (`{"name": "bug"}`) or a
/// bare string (`"bug"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LabelRepr")]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelRepr {
    Name(String),
    Object { name: String },
}

impl From<LabelRepr> for Label {
    fn from(repr: LabelRepr) -> Self {
        match repr {
            LabelRepr::Name(name) | LabelRepr::Object { name } => Label { name },
        }
    }
}

/// The author of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

/// Pull-request marker carried on issues that are pull requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Label>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Label>>::deserialize(deserializer)?.unwrap_or_default())
}
