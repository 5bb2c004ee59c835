//! Sidebar root and structural checks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::flat::FlatEntry;
use crate::item::{Link, SidebarItem};
use crate::walk::Walk;

/// Root of the navigation tree.
///
/// Built once from the site declaration and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar {
    items: Vec<SidebarItem>,
}

/// Structural problem found by [`Sidebar::check`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SidebarIssue {
    /// Node with an empty label.
    #[error("{location}: label cannot be empty")]
    EmptyLabel {
        /// Node location (e.g. `sidebar[1].items[0]`).
        location: String,
    },
    /// Group without children.
    #[error("{location}: group \"{label}\" has no items")]
    EmptyGroup {
        /// Node location.
        location: String,
        /// Group label.
        label: String,
    },
    /// Link whose route is empty or not site-relative.
    #[error("{location}: link \"{label}\" has invalid path \"{path}\" (must start with /)")]
    InvalidPath {
        /// Node location.
        location: String,
        /// Link label.
        label: String,
        /// Offending route.
        path: String,
    },
    /// Link repeating the label and route of an earlier sibling.
    #[error("{location}: duplicate link \"{label}\" -> {path}")]
    DuplicateSibling {
        /// Location of the repeated node.
        location: String,
        /// Link label.
        label: String,
        /// Link route.
        path: String,
    },
}

/// Sidebar error.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// One or more structural checks failed.
    #[error("Invalid sidebar: {}", format_issues(.0))]
    Invalid(Vec<SidebarIssue>),
}

fn format_issues(issues: &[SidebarIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Sidebar {
    /// Create a sidebar from its top-level nodes.
    #[must_use]
    pub fn new(items: Vec<SidebarItem>) -> Self {
        Self { items }
    }

    /// Top-level nodes in rendering order.
    #[must_use]
    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }

    /// Number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sidebar has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Depth-first pre-order traversal; top-level nodes are at depth 0.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.items)
    }

    /// Flatten the whole tree into `(depth, label, path)` entries.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatEntry<'_>> {
        self.walk().map(FlatEntry::from).collect()
    }

    /// All links in declaration order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.walk().filter_map(|(_, item)| match item {
            SidebarItem::Link(link) => Some(link),
            SidebarItem::Group(_) => None,
        })
    }

    /// First group with the given label, searching in declaration order.
    #[must_use]
    pub fn find_group(&self, label: &str) -> Option<&SidebarItem> {
        self.walk()
            .map(|(_, item)| item)
            .find(|item| matches!(item, SidebarItem::Group(group) if group.label == label))
    }

    /// Routes linked from more than one place, in order of first repeat.
    #[must_use]
    pub fn duplicate_paths(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for link in self.links() {
            let path = link.path.as_str();
            if !seen.insert(path) && !duplicates.contains(&path) {
                duplicates.push(path);
            }
        }
        duplicates
    }

    /// Run structural checks and return every issue found.
    ///
    /// Checks: labels are non-empty, groups have children, link routes start
    /// with `/`, and no two siblings repeat the same label and route.
    #[must_use]
    pub fn check(&self) -> Vec<SidebarIssue> {
        let mut issues = Vec::new();
        check_siblings(&self.items, "sidebar", &mut issues);
        issues
    }

    /// Fail if [`check`](Self::check) finds anything.
    pub fn validate(&self) -> Result<(), SidebarError> {
        let issues = self.check();
        if issues.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = issues.len(), "Sidebar validation failed");
            Err(SidebarError::Invalid(issues))
        }
    }
}

impl FromIterator<SidebarItem> for Sidebar {
    fn from_iter<I: IntoIterator<Item = SidebarItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn check_siblings(items: &[SidebarItem], parent: &str, issues: &mut Vec<SidebarIssue>) {
    let mut leaves = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        let location = format!("{parent}[{index}]");

        if item.label().is_empty() {
            issues.push(SidebarIssue::EmptyLabel {
                location: location.clone(),
            });
        }

        match item {
            SidebarItem::Group(group) => {
                if group.items.is_empty() {
                    issues.push(SidebarIssue::EmptyGroup {
                        location: location.clone(),
                        label: group.label.clone(),
                    });
                }
                check_siblings(&group.items, &format!("{location}.items"), issues);
            }
            SidebarItem::Link(link) => {
                if !link.path.starts_with('/') {
                    issues.push(SidebarIssue::InvalidPath {
                        location: location.clone(),
                        label: link.label.clone(),
                        path: link.path.clone(),
                    });
                }
                if !leaves.insert((link.label.as_str(), link.path.as_str())) {
                    issues.push(SidebarIssue::DuplicateSibling {
                        location,
                        label: link.label.clone(),
                        path: link.path.clone(),
                    });
                }
            }
        }
    }
}
