//! Menu theming with Tera templates.
//!
//! Templates never see [`Node`](crate::menu::Node) internals. Each node is
//! turned into a [`MenuView`] through the public accessors, so a template
//! can read `label`, `action`, `is_group`, and `items`.

mod engine;
mod view;

pub use engine::MenuTheme;
pub use view::MenuView;
