//! Menu registry - holds named menus and the role table.
//!
//! Menus are loaded from a definitions file (see [`MenuFile`]) or
//! registered directly, then filtered per viewer by name.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use super::loader::{MenuFile, MenuFormat};
use super::node::Node;
use crate::error::{MenuError, MenuResult};

/// Registry of named menus.
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    /// Menu trees, indexed by name.
    menus: BTreeMap<String, Node>,
    /// Role name -> visibility bits.
    roles: BTreeMap<String, i64>,
}

impl MenuRegistry {
    /// Create an empty menu registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from parsed definitions.
    pub fn from_definitions(file: MenuFile, max_depth: usize) -> MenuResult<Self> {
        let mut registry = Self {
            menus: BTreeMap::new(),
            roles: file.roles,
        };

        for (name, definition) in &file.menus {
            let node = definition.to_node(&registry.roles, max_depth)?;
            registry.register(name.clone(), node);
        }

        if registry.is_empty() {
            warn!("menu definitions contain no menus");
        }
        debug!(
            menus = registry.len(),
            roles = registry.roles.len(),
            "built menu registry"
        );
        Ok(registry)
    }

    /// Parse definitions from a string.
    pub fn parse_str(content: &str, format: MenuFormat, max_depth: usize) -> MenuResult<Self> {
        debug!(%format, "parsing menu definitions");
        Self::from_definitions(MenuFile::parse_str(content, format)?, max_depth)
    }

    /// Load definitions from a file, choosing the format by extension.
    pub fn from_file(path: &Path, max_depth: usize) -> MenuResult<Self> {
        debug!(path = %path.display(), "loading menu definitions");
        Self::from_definitions(MenuFile::parse(path)?, max_depth)
    }

    /// Register a menu, replacing any menu with the same name.
    pub fn register(&mut self, name: impl Into<String>, menu: Node) {
        let name = name.into();
        if self.menus.insert(name.clone(), menu).is_some() {
            warn!(menu = %name, "replaced existing menu");
        }
    }

    /// Declare a role and its visibility bits.
    pub fn register_role(&mut self, name: impl Into<String>, bits: i64) {
        self.roles.insert(name.into(), bits);
    }

    /// Get a menu by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.menus.get(name)
    }

    /// Menu names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }

    /// Get a copy of the named menu filtered for `mask`.
    pub fn filtered(&self, name: &str, mask: i64) -> Option<Node> {
        self.menus.get(name).map(|menu| menu.filtered(mask))
    }

    /// Combine the bits of the given roles into a query mask.
    ///
    /// An empty role list yields 0, which shows nothing.
    pub fn mask_for_roles<S: AsRef<str>>(&self, roles: &[S]) -> MenuResult<i64> {
        roles.iter().try_fold(0, |mask, role| {
            let role = role.as_ref();
            self.roles
                .get(role)
                .map(|bits| mask | bits)
                .ok_or_else(|| MenuError::UnknownQueryRole(role.to_string()))
        })
    }

    /// Get menu count.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
