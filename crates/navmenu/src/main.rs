//! navmenu - inspect and validate responsive navbar configurations

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use navmenu_core::MenuSide;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "navmenu",
    version,
    about = "Inspect and validate responsive navbar configurations",
    long_about = "Loads a navbar configuration (JSON or YAML) and either validates it or\n\
                  prints the compact navigation bar it renders at a given window width.\n\
                  \n\
                  Examples:\n\
                    navmenu check navbar.yaml              # Validate a config file\n\
                    navmenu render --width 600             # Default config, all menus closed\n\
                    navmenu render --width 600 --open left # Left dropdown open\n\
                    navmenu default-config --format yaml   # Print a starting template\n\
                  \n\
                  Environment Variables:\n\
                    NAVMENU_CONFIG                         # Config file used by 'render'\n\
                    RUST_LOG                               # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a config file and print a summary
    Check {
        /// Path to a .json, .yaml or .yml file
        path: PathBuf,
    },
    /// Print the rendered bar as a text outline
    Render {
        /// Window width in CSS pixels
        #[arg(long)]
        width: u32,
        /// Menu to open before rendering (left, user, right)
        #[arg(long)]
        open: Option<MenuSide>,
        /// Config file (default: built-in config)
        #[arg(long, env = "NAVMENU_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the built-in config
    DefaultConfig {
        #[arg(long, default_value = "yaml", value_parser = ["json", "yaml"])]
        format: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Command::Check { path } => cli::run_check(&path)?,
        Command::Render {
            width,
            open,
            config,
        } => cli::run_render(config.as_deref(), width, open)?,
        Command::DefaultConfig { format } => cli::run_default_config(&format)?,
    };

    print!("{}", output);
    Ok(())
}
