use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::fmt::Write;
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn handle_config(subcommand: Option<ConfigCommands>, config_dir: &Path) -> Result<()> {
    let mut config = Config::load(config_dir)?;

    match subcommand {
        None => {
            println!("\nCurrent Configuration:");
            println!("  Date Format: {}", config.date_format);
            println!("  Sort Order: {}", config.sort_order);
            println!("  Log Level: {}", config.log_level);
        }
        Some(ConfigCommands::DateFormat { format }) => {
            validate_date_format(&format)?;
            config.date_format = format.clone();
            config.save(config_dir)?;
            println!("✓ Date format updated to: {}", format);
        }
        Some(ConfigCommands::Sort { order }) => {
            config.sort_order = order;
            config.save(config_dir)?;
            println!("✓ Sort order updated to: {}", order);
        }
        Some(ConfigCommands::LogLevel { level }) => {
            tracing_subscriber::EnvFilter::try_new(&level)
                .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", level, e))?;
            config.log_level = level.clone();
            config.save(config_dir)?;
            println!("✓ Log level updated to: {}", level);
        }
    }

    Ok(())
}

pub fn validate_date_format(format: &str) -> Result<()> {
    if format.is_empty() {
        bail!("Date format cannot be empty");
    }
    // Time specifiers such as %H fail only when formatting a date.
    let sample = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    let mut out = String::new();
    if write!(out, "{}", sample.format(format)).is_err() {
        bail!("Invalid date format: '{}'", format);
    }
    Ok(())
}
