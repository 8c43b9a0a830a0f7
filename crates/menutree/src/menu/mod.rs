//! Menu trees with bitmask visibility.
//!
//! A menu is a tree of [`Node`]s, each either a leaf (label + action) or a
//! group (label + ordered children). Every node carries a visibility mask;
//! a query mask describing the current viewer is ANDed against it to decide
//! what is shown. The module provides:
//! - Construction and accessors (`node`)
//! - Visibility checks and pruned copies (`filter`)
//! - Indented text output (`render`)
//! - JSON-equivalent export through serde (`export`)
//! - Definition files and named menus (`loader`, `registry`)
//!
//! Trees must be acyclic. Owned children make a cycle unrepresentable, but
//! recursion depth still equals tree depth; use
//! [`Node::filtered_checked`] or the loader's depth limit when trees come
//! from untrusted input.

mod export;
mod filter;
mod loader;
mod node;
mod registry;
mod render;

pub use loader::{MenuDefinition, MenuFile, MenuFormat};
pub use node::{ALWAYS_VISIBLE, Group, Leaf, Node};
pub use registry::MenuRegistry;
