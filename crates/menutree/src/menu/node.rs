//! Menu node model.

/// Visibility mask with every bit set: visible under any nonzero query mask.
pub const ALWAYS_VISIBLE: i64 = -1;

/// A node in a menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal entry with an action.
    Leaf(Leaf),
    /// Container of child nodes.
    Group(Group),
}

/// An actionable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// Display text, or a translation key.
    pub(crate) label: String,
    /// Destination, e.g. a URL path or route key.
    pub(crate) action: String,
    pub(crate) visibility: i64,
}

/// A container of ordered child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub(crate) label: String,
    pub(crate) children: Vec<Node>,
    pub(crate) visibility: i64,
}

impl Node {
    /// Create a group that is visible whenever one of its children is.
    pub fn group(label: impl Into<String>, children: Vec<Node>) -> Self {
        Self::group_masked(label, children, ALWAYS_VISIBLE)
    }

    /// Create a group with its own visibility mask.
    ///
    /// A hidden group hides everything beneath it.
    pub fn group_masked(label: impl Into<String>, children: Vec<Node>, visibility: i64) -> Self {
        Node::Group(Group {
            label: label.into(),
            children,
            visibility,
        })
    }

    /// Create an always-visible leaf.
    pub fn leaf(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self::leaf_masked(label, action, ALWAYS_VISIBLE)
    }

    /// Create a leaf with a visibility mask.
    pub fn leaf_masked(label: impl Into<String>, action: impl Into<String>, visibility: i64) -> Self {
        Node::Leaf(Leaf {
            label: label.into(),
            action: action.into(),
            visibility,
        })
    }

    /// Display text for this node.
    pub fn label(&self) -> &str {
        match self {
            Node::Leaf(leaf) => &leaf.label,
            Node::Group(group) => &group.label,
        }
    }

    /// Action to take when selected. Empty for groups.
    pub fn action(&self) -> &str {
        match self {
            Node::Leaf(leaf) => &leaf.action,
            Node::Group(_) => "",
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    /// Children of a group, in order. Empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Group(group) => &group.children,
        }
    }

    /// The node's own visibility mask.
    pub fn visibility(&self) -> i64 {
        match self {
            Node::Leaf(leaf) => leaf.visibility,
            Node::Group(group) => group.visibility,
        }
    }

    /// Number of levels in this subtree. A leaf or empty group has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// All leaves beneath this node, in document order.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Node>) {
        match self {
            Node::Leaf(_) => out.push(self),
            Node::Group(group) => {
                for child in &group.children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}
