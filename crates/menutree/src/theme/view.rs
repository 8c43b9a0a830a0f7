//! Template-facing view of a menu node.

use serde::Serialize;

use crate::menu::Node;

/// A node as seen by templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub label: String,
    /// Empty for groups.
    pub action: String,
    pub is_group: bool,
    /// Empty for leaves.
    pub items: Vec<MenuView>,
}

impl From<&Node> for MenuView {
    fn from(node: &Node) -> Self {
        Self {
            label: node.label().to_string(),
            action: node.action().to_string(),
            is_group: node.is_group(),
            items: node.children().iter().map(MenuView::from).collect(),
        }
    }
}
