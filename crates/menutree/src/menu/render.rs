//! Indented plain-text rendering.
//!
//! The exact layout is part of the public contract: one node per line, one
//! tab per nesting level, leaves as `label: action`, and no trailing newline.

use std::fmt;

use super::node::Node;

impl Node {
    /// Render this node with `indent` tabs before every line.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_indented(&mut out, indent);
        out
    }

    fn write_indented(&self, out: &mut String, indent: usize) {
        for _ in 0..indent {
            out.push('\t');
        }
        match self {
            Node::Leaf(leaf) => {
                out.push_str(&leaf.label);
                out.push_str(": ");
                out.push_str(&leaf.action);
            }
            Node::Group(group) => {
                out.push_str(&group.label);
                for child in &group.children {
                    out.push('\n');
                    child.write_indented(out, indent + 1);
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}
