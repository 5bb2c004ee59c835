//! Sidebar nodes.
//!
//! On the wire a node is told apart by its shape: `{label, link}` is a
//! [`Link`], `{label, items}` is a [`Group`]. In Rust the distinction is
//! the [`SidebarItem`] variant. Parsing resolves the shape explicitly so
//! errors name the offending key or label.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::flat::FlatEntry;
use crate::walk::Walk;

/// Sidebar node: either a labeled group of children or a leaf link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Container node.
    Group(Group),
    /// Leaf node.
    Link(Link),
}

/// Labeled container holding an ordered sequence of children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Display label.
    pub label: String,
    /// Children in rendering order.
    pub items: Vec<SidebarItem>,
    /// Render the group collapsed.
    #[serde(skip_serializing_if = "is_false")]
    pub collapsed: bool,
}

/// Leaf node pairing a display label with a site-relative route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Display label.
    pub label: String,
    /// Target route (e.g. `/getting-started/introduction/`).
    #[serde(rename = "link")]
    pub path: String,
}

/// Node as written in a declaration, before its shape is resolved.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    label: String,
    link: Option<String>,
    items: Option<Vec<SidebarItem>>,
    collapsed: Option<bool>,
}

impl<'de> Deserialize<'de> for SidebarItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawItem::deserialize(deserializer)?;
        match (raw.link, raw.items) {
            (Some(path), None) => {
                if raw.collapsed.is_some() {
                    return Err(D::Error::custom(format!(
                        "link \"{}\" cannot set `collapsed`",
                        raw.label
                    )));
                }
                Ok(Self::Link(Link {
                    label: raw.label,
                    path,
                }))
            }
            (None, Some(items)) => Ok(Self::Group(Group {
                label: raw.label,
                items,
                collapsed: raw.collapsed.unwrap_or(false),
            })),
            (Some(_), Some(_)) => Err(D::Error::custom(format!(
                "sidebar item \"{}\" cannot have both `link` and `items`",
                raw.label
            ))),
            (None, None) => Err(D::Error::custom(format!(
                "sidebar item \"{}\" needs either `link` or `items`",
                raw.label
            ))),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl SidebarItem {
    /// Create a link node.
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Link(Link::new(label, path))
    }

    /// Create a group node from its children.
    pub fn group(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self::Group(Group {
            label: label.into(),
            items,
            collapsed: false,
        })
    }

    /// Display label of the node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Group(group) => &group.label,
            Self::Link(link) => &link.label,
        }
    }

    /// Target route for links, `None` for groups.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Group(_) => None,
            Self::Link(link) => Some(&link.path),
        }
    }

    /// Children of a group; empty for links.
    #[must_use]
    pub fn children(&self) -> &[SidebarItem] {
        match self {
            Self::Group(group) => &group.items,
            Self::Link(_) => &[],
        }
    }

    /// Depth-first pre-order traversal starting at this node (depth 0).
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(std::slice::from_ref(self))
    }

    /// Flatten this node and its descendants into `(depth, label, path)` entries.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatEntry<'_>> {
        self.walk().map(FlatEntry::from).collect()
    }
}

impl Group {
    /// Create an empty group.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
            collapsed: false,
        }
    }

    /// Append a link child.
    #[must_use]
    pub fn link(mut self, label: impl Into<String>, path: impl Into<String>) -> Self {
        self.items.push(SidebarItem::link(label, path));
        self
    }

    /// Append a nested group child.
    #[must_use]
    pub fn group(mut self, child: Group) -> Self {
        self.items.push(SidebarItem::Group(child));
        self
    }

    /// Set whether the group renders collapsed.
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

impl Link {
    /// Create a link.
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

impl From<Group> for SidebarItem {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<Link> for SidebarItem {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_link_constructor_stores_label_and_path() {
        let item = SidebarItem::link("Giới thiệu", "/getting-started/introduction/");

        assert_eq!(item.label(), "Giới thiệu");
        assert_eq!(item.path(), Some("/getting-started/introduction/"));
        assert!(item.children().is_empty());
    }

    #[test]
    fn test_group_builder_preserves_order() {
        let group = Group::new("Lệnh")
            .link("Lệnh người chơi", "/commands/player-commands/")
            .link("Lệnh admin", "/commands/admin-commands/");
        let item = SidebarItem::from(group);

        let labels: Vec<_> = item.children().iter().map(SidebarItem::label).collect();
        assert_eq!(labels, vec!["Lệnh người chơi", "Lệnh admin"]);
        assert_eq!(item.path(), None);
    }

    #[test]
    fn test_link_serializes_with_link_key() {
        let item = SidebarItem::link("Placeholders", "/placeholders/");

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"label": "Placeholders", "link": "/placeholders/"})
        );
    }

    #[test]
    fn test_group_serialization_omits_collapsed_when_false() {
        let item = SidebarItem::from(Group::new("API").link("Custom Events", "/api/events/"));

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["label"], "API");
        assert_eq!(json["items"][0]["link"], "/api/events/");
        assert!(json.get("collapsed").is_none());
    }

    #[test]
    fn test_group_serialization_keeps_collapsed_when_true() {
        let item = SidebarItem::from(
            Group::new("API")
                .link("Custom Events", "/api/events/")
                .collapsed(true),
        );

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["collapsed"], true);
    }

    #[test]
    fn test_deserialize_by_shape() {
        let json = r#"[
            {"label": "Placeholders", "link": "/placeholders/"},
            {"label": "API", "items": [{"label": "Custom Events", "link": "/api/events/"}]}
        ]"#;

        let items: Vec<SidebarItem> = serde_json::from_str(json).unwrap();

        assert!(matches!(items[0], SidebarItem::Link(_)));
        assert!(matches!(items[1], SidebarItem::Group(_)));
        assert_eq!(items[1].children()[0].path(), Some("/api/events/"));
    }

    /// Assert that parsing fails with expected substrings in the error message.
    fn assert_parse_error(json: &str, expected_substrings: &[&str]) {
        let result: Result<SidebarItem, _> = serde_json::from_str(json);
        let msg = result.expect_err("Expected parsing to fail").to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_link_and_items_together() {
        assert_parse_error(
            r#"{"label": "Both", "link": "/both/", "items": []}"#,
            &["Both", "both `link` and `items`"],
        );
    }

    #[test]
    fn test_deserialize_rejects_label_only() {
        assert_parse_error(
            r#"{"label": "Nothing"}"#,
            &["Nothing", "either `link` or `items`"],
        );
    }

    #[test]
    fn test_deserialize_names_misspelled_key() {
        assert_parse_error(
            r#"{"label": "Sepay", "lnk": "/payment-gateways/banking/sepay/"}"#,
            &["unknown field", "lnk"],
        );
    }

    #[test]
    fn test_deserialize_rejects_collapsed_link() {
        assert_parse_error(
            r#"{"label": "API", "link": "/api/events/", "collapsed": true}"#,
            &["API", "collapsed"],
        );
    }

    #[test]
    fn test_deserialize_group_collapsed_flag() {
        let json = r#"{"label": "API", "collapsed": true, "items": [{"label": "Custom Events", "link": "/api/events/"}]}"#;

        let item: SidebarItem = serde_json::from_str(json).unwrap();

        assert!(matches!(item, SidebarItem::Group(Group { collapsed: true, .. })));
    }

    #[test]
    fn test_deserialize_misspelled_key_in_toml_is_named() {
        #[derive(Debug, Deserialize)]
        struct Doc {
            #[allow(dead_code)]
            sidebar: Vec<SidebarItem>,
        }

        let toml = r#"
[[sidebar]]
label = "Placeholders"
lnk = "/placeholders/"
"#;
        let err = toml::from_str::<Doc>(toml).unwrap_err();

        assert!(err.to_string().contains("lnk"), "got: {err}");
    }
}
