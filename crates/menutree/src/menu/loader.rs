//! Menu definition files.
//!
//! Definitions may be written in JSON, YAML, or TOML. A file declares an
//! optional role table (role name -> visibility bits) and a set of named
//! menus. Each definition with `items` becomes a group; any other becomes a
//! leaf. Exported JSON is itself a valid definition.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::node::{ALWAYS_VISIBLE, Node};
use crate::error::{MenuError, MenuResult};

/// Supported definition file syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Json,
    Yaml,
    Toml,
}

impl MenuFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> MenuResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(MenuError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for MenuFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// Top level of a definitions file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuFile {
    /// Role name -> visibility bits.
    #[serde(default)]
    pub roles: BTreeMap<String, i64>,

    /// Menu name (e.g. "main", "footer") -> root definition.
    #[serde(default)]
    pub menus: BTreeMap<String, MenuDefinition>,
}

/// A single raw menu entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuDefinition {
    pub label: String,

    /// Destination for leaves.
    #[serde(default)]
    pub action: Option<String>,

    /// Children; presence (even empty) makes this a group.
    #[serde(default)]
    pub items: Option<Vec<MenuDefinition>>,

    /// Explicit visibility mask.
    #[serde(default)]
    pub mask: Option<i64>,

    /// Roles allowed to see this entry, resolved through the role table.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl MenuFile {
    /// Parse definitions from a string.
    pub fn parse_str(content: &str, format: MenuFormat) -> MenuResult<Self> {
        let file = match format {
            MenuFormat::Json => serde_json::from_str(content)?,
            MenuFormat::Yaml => serde_yml::from_str(content)?,
            MenuFormat::Toml => toml::from_str(content)?,
        };
        Ok(file)
    }

    /// Read and parse a definitions file, choosing the format by extension.
    pub fn parse(path: &Path) -> MenuResult<Self> {
        let format = MenuFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content, format)
    }
}

impl MenuDefinition {
    /// Build a node tree, resolving role names through `roles` and refusing
    /// definitions nested deeper than `max_depth` levels.
    pub fn to_node(&self, roles: &BTreeMap<String, i64>, max_depth: usize) -> MenuResult<Node> {
        if max_depth == 0 {
            return Err(MenuError::DepthExceeded { limit: 0 });
        }
        self.build(roles, max_depth, max_depth)
    }

    fn build(
        &self,
        roles: &BTreeMap<String, i64>,
        limit: usize,
        remaining: usize,
    ) -> MenuResult<Node> {
        let visibility = self.visibility(roles)?;

        match (&self.items, &self.action) {
            (Some(_), Some(_)) => Err(self.invalid("a menu entry cannot have both action and items")),
            (Some(items), None) => {
                if !items.is_empty() && remaining <= 1 {
                    return Err(MenuError::DepthExceeded { limit });
                }
                let children = items
                    .iter()
                    .map(|item| item.build(roles, limit, remaining - 1))
                    .collect::<MenuResult<Vec<_>>>()?;
                Ok(Node::group_masked(self.label.clone(), children, visibility))
            }
            (None, action) => Ok(Node::leaf_masked(
                self.label.clone(),
                action.clone().unwrap_or_default(),
                visibility,
            )),
        }
    }

    fn visibility(&self, roles: &BTreeMap<String, i64>) -> MenuResult<i64> {
        match (self.mask, self.roles.is_empty()) {
            (Some(_), false) => Err(self.invalid("use either mask or roles, not both")),
            (Some(mask), true) => Ok(mask),
            (None, true) => Ok(ALWAYS_VISIBLE),
            (None, false) => self.roles.iter().try_fold(0, |mask, role| {
                roles
                    .get(role)
                    .map(|bits| mask | bits)
                    .ok_or_else(|| MenuError::UnknownRole {
                        role: role.clone(),
                        label: self.label.clone(),
                    })
            }),
        }
    }

    fn invalid(&self, reason: &str) -> MenuError {
        MenuError::InvalidDefinition {
            label: self.label.clone(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn roles() -> BTreeMap<String, i64> {
        BTreeMap::from([
            ("anonymous".to_string(), 0x01),
            ("authenticated".to_string(), 0x02),
            ("admin".to_string(), 0x80),
        ])
    }

    fn definition(json: &str) -> MenuDefinition {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(MenuFormat::from_path(Path::new("a.json")).unwrap(), MenuFormat::Json);
        assert_eq!(MenuFormat::from_path(Path::new("a.YML")).unwrap(), MenuFormat::Yaml);
        assert_eq!(MenuFormat::from_path(Path::new("a.yaml")).unwrap(), MenuFormat::Yaml);
        assert_eq!(MenuFormat::from_path(Path::new("a.toml")).unwrap(), MenuFormat::Toml);
        assert!(matches!(
            MenuFormat::from_path(Path::new("menu.ini")),
            Err(MenuError::UnsupportedFormat(_))
        ));
        assert!(MenuFormat::from_path(Path::new("menu")).is_err());
    }

    #[test]
    fn leaf_and_group_shapes() {
        let def = definition(
            r#"{"label": "Main", "items": [
                {"label": "About", "action": "/about"},
                {"label": "Empty", "items": []},
                {"label": "Blank"}
            ]}"#,
        );
        let node = def.to_node(&roles(), 8).unwrap();
        assert!(node.is_group());
        let children = node.children();
        assert_eq!(children[0], Node::leaf("About", "/about"));
        assert_eq!(children[1], Node::group("Empty", vec![]));
        assert_eq!(children[2], Node::leaf("Blank", ""));
    }

    #[test]
    fn explicit_mask() {
        let node = definition(r#"{"label": "Admin", "action": "/admin", "mask": 128}"#)
            .to_node(&roles(), 8)
            .unwrap();
        assert_eq!(node, Node::leaf_masked("Admin", "/admin", 0x80));
    }

    #[test]
    fn roles_are_or_ed() {
        let node = definition(
            r#"{"label": "Account", "action": "/account", "roles": ["authenticated", "admin"]}"#,
        )
        .to_node(&roles(), 8)
        .unwrap();
        assert_eq!(node.visibility(), 0x82);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = definition(r#"{"label": "Drafts", "action": "/drafts", "roles": ["editor"]}"#)
            .to_node(&roles(), 8)
            .unwrap_err();
        assert!(matches!(err, MenuError::UnknownRole { ref role, .. } if role == "editor"));
    }

    #[test]
    fn mask_and_roles_conflict() {
        let err = definition(r#"{"label": "X", "action": "/x", "mask": 1, "roles": ["admin"]}"#)
            .to_node(&roles(), 8)
            .unwrap_err();
        assert!(matches!(err, MenuError::InvalidDefinition { .. }));
    }

    #[test]
    fn action_and_items_conflict() {
        let err = definition(r#"{"label": "X", "action": "/x", "items": []}"#)
            .to_node(&roles(), 8)
            .unwrap_err();
        assert!(matches!(err, MenuError::InvalidDefinition { ref label, .. } if label == "X"));
    }

    #[test]
    fn depth_limit() {
        let def = definition(
            r#"{"label": "A", "items": [{"label": "B", "items": [{"label": "C", "action": "/c"}]}]}"#,
        );
        assert_eq!(def.to_node(&roles(), 3).unwrap().depth(), 3);
        assert!(matches!(
            def.to_node(&roles(), 2),
            Err(MenuError::DepthExceeded { limit: 2 })
        ));
        assert!(matches!(
            def.to_node(&roles(), 0),
            Err(MenuError::DepthExceeded { limit: 0 })
        ));
    }

    #[test]
    fn parse_yaml() {
        let yaml = r#"
roles:
  admin: 128
menus:
  main:
    label: Main
    items:
      - label: About
        action: /about
      - label: Admin
        action: /admin
        roles: [admin]
"#;
        let file = MenuFile::parse_str(yaml, MenuFormat::Yaml).unwrap();
        assert_eq!(file.roles.get("admin"), Some(&128));
        let main = file.menus["main"].to_node(&file.roles, 8).unwrap();
        assert_eq!(main.to_string(), "Main\n\tAbout: /about\n\tAdmin: /admin");
        assert_eq!(main.children()[1].visibility(), 128);
    }

    #[test]
    fn parse_toml() {
        let toml = r#"
[roles]
member = 1

[menus.footer]
label = "Footer"

[[menus.footer.items]]
label = "Contact"
action = "/contact"

[[menus.footer.items]]
label = "Members"
action = "/members"
roles = ["member"]
"#;
        let file = MenuFile::parse_str(toml, MenuFormat::Toml).unwrap();
        let footer = file.menus["footer"].to_node(&file.roles, 8).unwrap();
        assert_eq!(footer.children().len(), 2);
        assert_eq!(footer.filtered(0x02).to_string(), "Footer\n\tContact: /contact");
    }

    #[test]
    fn parse_error_is_reported() {
        let err = MenuFile::parse_str("{not json", MenuFormat::Json).unwrap_err();
        assert!(matches!(err, MenuError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = MenuFile::parse(Path::new("/nonexistent/menus.json")).unwrap_err();
        assert!(matches!(err, MenuError::Io { .. }));
    }

    #[test]
    fn exported_json_loads_back() {
        let tree = Node::group(
            "Root",
            vec![
                Node::leaf("A", "/a"),
                Node::group("B", vec![Node::leaf("B0", "/b0")]),
            ],
        );
        let def: MenuDefinition = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
        assert_eq!(def.to_node(&BTreeMap::new(), 8).unwrap(), tree);
    }
}
