use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "An animated single-page portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start in dark mode (overrides the configured theme)
    #[arg(long)]
    dark: bool,

    /// Collapse all animations (reveals appear instantly, marquee stands still)
    #[arg(long)]
    reduced_motion: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List the portfolio work items
    Work {
        /// Only show items in this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved configuration
    Show,
    /// Write a default config.toml
    Init,
    /// Print the config file path
    Path,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration, letting flags override the file
    let mut config = AppConfig::load()?;
    if cli.dark {
        config.ui.theme.name = "dark".to_string();
    }
    if cli.reduced_motion {
        config.motion.reduced_motion = true;
    }
    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Work { category, json }) => {
            commands::work::run(category.as_deref(), json)
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config_cmd::show(&config),
            ConfigAction::Init => commands::config_cmd::init(),
            ConfigAction::Path => commands::config_cmd::path(),
        },
    }
}
