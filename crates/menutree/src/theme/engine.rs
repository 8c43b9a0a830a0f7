//! Menu theme engine with Tera templates and suggestion resolution.

use std::path::Path;

use tera::{Context, Tera};
use tracing::debug;

use super::view::MenuView;
use crate::error::{MenuError, MenuResult};
use crate::menu::Node;

/// Name of the fallback menu template.
const BASE_TEMPLATE: &str = "menu.html";

/// Built-in markup for two levels of navigation.
const BUILTIN_MENU: &str = r#"<nav class="menu">
<ul>
{%- for item in menu.items %}
  <li>
  {%- if item.is_group %}
    <span>{{ item.label }}</span>
    <ul>
    {%- for child in item.items %}
      <li><a href="{{ child.action }}">{{ child.label }}</a></li>
    {%- endfor %}
    </ul>
  {%- else %}
    <a href="{{ item.action }}">{{ item.label }}</a>
  {%- endif %}
  </li>
{%- endfor %}
</ul>
</nav>
"#;

/// Theme engine for rendering menus to HTML.
pub struct MenuTheme {
    tera: Tera,
}

impl MenuTheme {
    /// Create a theme loading `**/*.html` templates from the given
    /// directory. The built-in `menu.html` is added if the directory does
    /// not provide one.
    pub fn new(template_dir: &Path) -> MenuResult<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .ok_or_else(|| MenuError::InvalidTemplateDir(template_dir.to_path_buf()))?;

        let mut tera = Tera::new(pattern_str)?;
        if tera.get_template(BASE_TEMPLATE).is_err() {
            tera.add_raw_template(BASE_TEMPLATE, BUILTIN_MENU)?;
        }

        debug!(
            count = tera.get_template_names().count(),
            dir = %template_dir.display(),
            "loaded menu templates"
        );
        Ok(Self { tera })
    }

    /// Create a theme with only the built-in template.
    pub fn builtin() -> MenuResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(BASE_TEMPLATE, BUILTIN_MENU)?;
        Ok(Self { tera })
    }

    /// Add or replace a template at runtime.
    pub fn add_template(&mut self, name: &str, source: &str) -> MenuResult<()> {
        self.tera.add_raw_template(name, source)?;
        Ok(())
    }

    /// Template suggestions for a named menu, most specific first.
    ///
    /// `"main"` yields `["menu--main.html", "menu.html"]`.
    pub fn menu_suggestions(menu_name: &str) -> Vec<String> {
        let mut suggestions = Vec::with_capacity(2);
        let name = menu_name.trim();
        if !name.is_empty() {
            suggestions.push(format!("menu--{name}.html"));
        }
        suggestions.push(BASE_TEMPLATE.to_string());
        suggestions
    }

    /// Resolve the best template for a named menu.
    pub fn resolve_template(&self, menu_name: &str) -> Option<String> {
        Self::menu_suggestions(menu_name)
            .into_iter()
            .find(|name| self.tera.get_template(name).is_ok())
    }

    /// Render a menu with the template resolved from its name.
    ///
    /// Pass a filtered tree so hidden entries never reach the markup.
    pub fn render_menu(&self, menu_name: &str, menu: &Node) -> MenuResult<String> {
        let template = self
            .resolve_template(menu_name)
            .ok_or_else(|| tera::Error::template_not_found(BASE_TEMPLATE))?;
        debug!(menu = %menu_name, %template, "rendering menu");
        self.render(&template, menu)
    }

    /// Render a menu with a specific template. The tree is available to the
    /// template as `menu`.
    pub fn render(&self, template: &str, menu: &Node) -> MenuResult<String> {
        let mut context = Context::new();
        context.insert("menu", &MenuView::from(menu));
        Ok(self.tera.render(template, &context)?)
    }
}

impl std::fmt::Debug for MenuTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuTheme")
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}
