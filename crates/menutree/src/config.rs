//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default limit on menu nesting for loading and checked filtering.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Menu definitions file used when none is given on the command line.
    pub menu_file: Option<PathBuf>,

    /// Maximum menu nesting depth (default: 32).
    pub max_depth: usize,

    /// Directory of Tera templates for HTML output. When None, the built-in
    /// `menu.html` template is used.
    pub template_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let menu_file = lookup("MENU_FILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let max_depth = match lookup("MENU_MAX_DEPTH") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("MENU_MAX_DEPTH must be a valid usize")?,
            None => DEFAULT_MAX_DEPTH,
        };

        let template_dir = lookup("MENU_TEMPLATE_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            menu_file,
            max_depth,
            template_dir,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_file: None,
            max_depth: DEFAULT_MAX_DEPTH,
            template_dir: None,
        }
    }
}
