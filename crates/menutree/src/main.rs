//! menutree command-line front end.
//!
//! Loads menu definitions, filters a menu for a viewer, and prints it as
//! text, JSON, or HTML.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use menutree::cli::{self, OutputFormat, Viewer};
use menutree::theme::MenuTheme;
use menutree::{Config, MenuRegistry};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Menu definitions file (JSON, YAML, or TOML). Defaults to MENU_FILE.
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the menus in the definitions file.
    List,
    /// Print a menu as seen by a viewer.
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Menu name.
    #[arg(long, short, default_value = "main")]
    menu: String,

    /// Query mask, decimal or 0x hexadecimal.
    #[arg(long, value_parser = cli::parse_mask, allow_hyphen_values = true, conflicts_with = "role")]
    mask: Option<i64>,

    /// Viewer role; repeat for several roles.
    #[arg(long)]
    role: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ShowArgs {
    fn viewer(&self) -> Viewer {
        if let Some(mask) = self.mask {
            Viewer::Mask(mask)
        } else if !self.role.is_empty() {
            Viewer::Roles(self.role.clone())
        } else {
            Viewer::Unfiltered
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let path = args
        .file
        .or_else(|| config.menu_file.clone())
        .context("no menu file given: pass --file or set MENU_FILE")?;

    let registry = MenuRegistry::from_file(&path, config.max_depth)
        .with_context(|| format!("failed to load menus from {}", path.display()))?;
    info!(menus = registry.len(), path = %path.display(), "menus loaded");

    let output = match args.command {
        Command::List => cli::cmd_list(&registry),
        Command::Show(show) => {
            let theme = match &config.template_dir {
                Some(dir) => MenuTheme::new(dir)
                    .with_context(|| format!("failed to load templates from {}", dir.display()))?,
                None => MenuTheme::builtin().context("failed to load built-in template")?,
            };
            cli::cmd_show(&registry, &theme, &show.menu, &show.viewer(), show.format)?
        }
    };

    println!("{output}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
