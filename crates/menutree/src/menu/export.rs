//! Structured export through serde.
//!
//! Leaves serialize as `{"label", "action"}` and groups as
//! `{"label", "items"}`. Visibility masks are filtering state only and are
//! never written out, so export a filtered tree to keep hidden entries from
//! reaching the output.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

use super::node::Node;
use crate::error::MenuResult;

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(leaf) => {
                let mut state = serializer.serialize_struct("Leaf", 2)?;
                state.serialize_field("label", &leaf.label)?;
                state.serialize_field("action", &leaf.action)?;
                state.end()
            }
            Node::Group(group) => {
                let mut state = serializer.serialize_struct("Group", 2)?;
                state.serialize_field("label", &group.label)?;
                state.serialize_field("items", &group.children)?;
                state.end()
            }
        }
    }
}

impl Node {
    /// Compact JSON.
    pub fn to_json(&self) -> MenuResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON.
    pub fn to_json_pretty(&self) -> MenuResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON value tree, e.g. for embedding in a larger document. Keys keep
    /// the serialized order.
    pub fn to_value(&self) -> MenuResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
