//! CLI command implementations.
//!
//! Commands build their output as a string; the binary prints it.

use anyhow::{Context, Result, bail};

use crate::menu::{MenuRegistry, Node};
use crate::theme::MenuTheme;

/// Output formats for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-indented text.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// HTML through the menu theme.
    Html,
}

/// Which viewer to filter for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    /// Show everything, masks untouched.
    Unfiltered,
    /// Filter with an explicit query mask.
    Mask(i64),
    /// Filter with the combined bits of named roles.
    Roles(Vec<String>),
}

/// Parse a mask given as decimal or `0x` hexadecimal, optionally negative.
///
/// The magnitude is read as an unsigned 64-bit value, so `-0x8000000000000000`
/// and `-9223372036854775808` both yield `i64::MIN`.
pub fn parse_mask(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    if digits.starts_with(['+', '-']) {
        return Err(format!("invalid mask '{raw}': unexpected sign"));
    }

    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) if hex.starts_with(['+', '-']) => {
            return Err(format!("invalid hex mask '{raw}': unexpected sign"));
        }
        Some(hex) => u64::from_str_radix(hex, 16)
            .map_err(|e| format!("invalid hex mask '{raw}': {e}"))?,
        None => digits
            .parse::<u64>()
            .map_err(|e| format!("invalid mask '{raw}': {e}"))?,
    };

    let value = magnitude as i64;
    Ok(if negative { value.wrapping_neg() } else { value })
}

/// List menus with their number of leaves.
pub fn cmd_list(registry: &MenuRegistry) -> String {
    if registry.is_empty() {
        return "No menus found.".to_string();
    }

    let header = format!("{:<20} {:<24} {:<6} {}", "MENU", "LABEL", "DEPTH", "LEAVES");
    let mut lines = vec![header, "-".repeat(58)];
    lines.extend(registry.names().filter_map(|name| {
        registry.get(name).map(|menu| {
            format!(
                "{:<20} {:<24} {:<6} {}",
                name,
                menu.label(),
                menu.depth(),
                menu.leaves().len()
            )
        })
    }));
    lines.join("\n") + "\n"
}

/// Filter a named menu for a viewer and format it.
pub fn cmd_show(
    registry: &MenuRegistry,
    theme: &MenuTheme,
    menu_name: &str,
    viewer: &Viewer,
    format: OutputFormat,
) -> Result<String> {
    let Some(menu) = registry.get(menu_name) else {
        let known: Vec<&str> = registry.names().collect();
        bail!("menu '{menu_name}' not found (available: {})", known.join(", "));
    };

    let menu: Node = match viewer {
        Viewer::Unfiltered => menu.clone(),
        Viewer::Mask(mask) => menu.filtered(*mask),
        Viewer::Roles(roles) => {
            let mask = registry
                .mask_for_roles(roles.as_slice())
                .context("failed to resolve roles")?;
            menu.filtered(mask)
        }
    };

    let output = match format {
        OutputFormat::Text => menu.to_string(),
        OutputFormat::Json => menu.to_json_pretty()?,
        OutputFormat::Html => theme
            .render_menu(menu_name, &menu)
            .with_context(|| format!("failed to render menu '{menu_name}'"))?,
    };
    Ok(output)
}
