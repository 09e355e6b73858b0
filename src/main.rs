use anyhow::Context;
use clap::Parser;
use shopping_list::config::Config;
use shopping_list::logging::init_tracing;
use std::path::PathBuf;

/// In-memory shopping list for the terminal.
#[derive(Debug, Parser)]
#[command(name = "shopping-list", version, about)]
struct Cli {
    /// Config file (default: <config dir>/shopping-list/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (also: SHOPPING_LIST_LOG).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    if let Some(log_path) = init_tracing(cli.log_file.as_deref(), &config.logging) {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            config = %config_path.display(),
            log = %log_path.display(),
            "starting"
        );
    }

    shopping_list::ui::runtime::run(&config).context("running terminal UI")?;
    Ok(())
}
