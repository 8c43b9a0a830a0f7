//! menutree library
//!
//! Hierarchical menus whose branches can be shown or hidden per caller via
//! visibility bitmasks. The `menutree` binary is a thin command-line front
//! end over this library.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod theme;

pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use menu::{ALWAYS_VISIBLE, Group, Leaf, MenuFormat, MenuRegistry, Node};
