//! Flat `(depth, label, path)` view of a sidebar tree.

use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::item::SidebarItem;

/// One node of a flattened tree.
///
/// Serializes as a `[depth, label, path]` tuple with `path` set to `null`
/// for groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatEntry<'a> {
    /// Distance from the node flattening started at.
    pub depth: usize,
    /// Display label.
    pub label: &'a str,
    /// Route for links, `None` for groups.
    pub path: Option<&'a str>,
}

impl<'a> FlatEntry<'a> {
    /// Create an entry.
    #[must_use]
    pub fn new(depth: usize, label: &'a str, path: Option<&'a str>) -> Self {
        Self { depth, label, path }
    }
}

impl<'a> From<(usize, &'a SidebarItem)> for FlatEntry<'a> {
    fn from((depth, item): (usize, &'a SidebarItem)) -> Self {
        Self::new(depth, item.label(), item.path())
    }
}

impl Serialize for FlatEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.depth)?;
        tuple.serialize_element(self.label)?;
        tuple.serialize_element(&self.path)?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_entry_serializes_as_tuple() {
        let entry = FlatEntry::new(1, "Cài đặt", Some("/getting-started/installation/"));

        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(json, r#"[1,"Cài đặt","/getting-started/installation/"]"#);
    }

    #[test]
    fn test_group_entry_serializes_null_path() {
        let entry = FlatEntry::new(0, "Bắt đầu", None);

        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(json, r#"[0,"Bắt đầu",null]"#);
    }
}
