//! Visibility filtering.
//!
//! A leaf is visible under a query mask when the two masks share a bit. A
//! group additionally needs at least one visible child, so empty and fully
//! hidden groups are never visible and never survive filtering.

use super::node::{ALWAYS_VISIBLE, Group, Node};
use crate::error::{MenuError, MenuResult};

impl Node {
    /// Whether this node is shown to a viewer with the given query mask.
    pub fn is_visible(&self, mask: i64) -> bool {
        match self {
            Node::Leaf(leaf) => mask & leaf.visibility != 0,
            Node::Group(group) => {
                mask & group.visibility != 0
                    && group.children.iter().any(|child| child.is_visible(mask))
            }
        }
    }

    /// Return a copy of this tree with every node invisible under `mask`
    /// removed. Leaves are returned unchanged.
    ///
    /// The root is always returned, even if it would itself be hidden; a
    /// group with no visible children comes back with an empty child list.
    ///
    /// Filtered groups lose their own mask: they come back as
    /// [`ALWAYS_VISIBLE`]. Filtering the result again with a different mask
    /// only re-applies the masks of the surviving leaves.
    pub fn filtered(&self, mask: i64) -> Node {
        match self {
            Node::Leaf(_) => self.clone(),
            Node::Group(group) => Node::Group(Group {
                label: group.label.clone(),
                children: group
                    .children
                    .iter()
                    .filter(|child| child.is_visible(mask))
                    .map(|child| child.filtered(mask))
                    .collect(),
                visibility: ALWAYS_VISIBLE,
            }),
        }
    }

    /// Like [`Node::filtered`], but refuses trees deeper than `max_depth`
    /// instead of risking stack exhaustion.
    pub fn filtered_checked(&self, mask: i64, max_depth: usize) -> MenuResult<Node> {
        if exceeds_depth(self, max_depth) {
            return Err(MenuError::DepthExceeded { limit: max_depth });
        }
        Ok(self.filtered(mask))
    }
}

/// Depth check that stops descending once the limit is passed.
fn exceeds_depth(node: &Node, remaining: usize) -> bool {
    if remaining == 0 {
        return true;
    }
    node.children()
        .iter()
        .any(|child| exceeds_depth(child, remaining - 1))
}
