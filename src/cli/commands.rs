use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::SortOrder;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser)]
#[command(name = "cdt")]
#[command(about = "Track hotel stays and their cooldown periods", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compute the checkout date and remaining cooldown of a single stay")]
    Calc {
        #[arg(long, value_parser = parse_date, help = "Check-in date (YYYY-MM-DD)")]
        check_in: NaiveDate,

        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Cooldown in days (default: 30)"
        )]
        cooldown: Option<u32>,

        #[arg(long, default_value = "stay", help = "Hotel name shown in the output")]
        name: String,

        #[arg(long, value_parser = parse_date, help = "Evaluate as of this date instead of today")]
        today: Option<NaiveDate>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    #[command(about = "Start an interactive tracking session (stays are kept in memory only)")]
    Session {
        #[arg(long, value_parser = parse_date, help = "Evaluate as of this date instead of today")]
        today: Option<NaiveDate>,
    },

    #[command(about = "Show or change configuration")]
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigCommands>,
    },

    #[command(about = "Generate shell completion script")]
    Completion {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Set the date display format (strftime syntax)")]
    DateFormat {
        #[arg(help = "Format string, e.g. %d.%m.%Y")]
        format: String,
    },

    #[command(about = "Set the default list order")]
    Sort {
        #[arg(value_enum, help = "List order")]
        order: SortOrder,
    },

    #[command(about = "Set the default log filter used when RUST_LOG is unset")]
    LogLevel {
        #[arg(help = "Filter directive, e.g. info or cdtrack=debug")]
        level: String,
    },
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| format!("Invalid date: '{}'. Expected YYYY-MM-DD", s))
}
