use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cdtrack::cli::{Cli, Commands};
use cdtrack::config::{get_config_dir, Config};
use cdtrack::handlers::{handle_calc, handle_completion, handle_config, handle_session};

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = get_config_dir()?;
    let config = Config::load(&config_dir)?;

    init_tracing(&config.log_level);
    tracing::debug!(config_dir = %config_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Calc {
            check_in,
            cooldown,
            name,
            today,
            json,
        } => handle_calc(&name, check_in, cooldown, today, json, &config),
        Commands::Session { today } => handle_session(today, &config),
        Commands::Config { subcommand } => handle_config(subcommand, &config_dir),
        Commands::Completion { shell } => handle_completion(&shell),
    }
}
