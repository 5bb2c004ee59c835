//! Depth-first traversal of sidebar nodes.

use crate::item::SidebarItem;

/// Pre-order iterator over sidebar nodes, yielding `(depth, node)`.
///
/// Nodes come out in declaration order: a group is yielded before its
/// children, and siblings keep their relative order.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a SidebarItem)>,
}

impl<'a> Walk<'a> {
    /// Start a traversal over `items`, which sit at depth 0.
    pub(crate) fn new(items: &'a [SidebarItem]) -> Self {
        Self {
            stack: items.iter().rev().map(|item| (0, item)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a SidebarItem);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, item) = self.stack.pop()?;
        self.stack.extend(
            item.children()
                .iter()
                .rev()
                .map(|child| (depth + 1, child)),
        );
        Some((depth, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Group;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_walk_yields_pre_order_with_depth() {
        let items = vec![
            SidebarItem::from(
                Group::new("A")
                    .group(Group::new("B").link("C", "/a/b/c/"))
                    .link("D", "/a/d/"),
            ),
            SidebarItem::link("E", "/e/"),
        ];

        let visited: Vec<_> = Walk::new(&items)
            .map(|(depth, item)| (depth, item.label()))
            .collect();

        assert_eq!(
            visited,
            vec![(0, "A"), (1, "B"), (2, "C"), (1, "D"), (0, "E")]
        );
    }

    #[test]
    fn test_walk_empty_slice() {
        assert_eq!(Walk::new(&[]).count(), 0);
    }
}
