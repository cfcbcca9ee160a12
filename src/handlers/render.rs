use chrono::NaiveDate;
use std::fmt::Write;

use crate::domain::CooldownStatus;

/// Formats `date` with a user-supplied strftime pattern, falling back to
/// ISO 8601 when the pattern is invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.to_string();
    }
    out
}

pub fn format_remaining(remaining_days: u64) -> String {
    match remaining_days {
        0 => "expired".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{} days left", n),
    }
}

pub fn format_status_line(status: &CooldownStatus, date_format: &str) -> String {
    let marker = if status.expiring_soon { "  ⚠ soon" } else { "" };
    format!(
        "{}  (check-in {}, CD {}d, until {})  {}{}",
        status.name,
        format_date(status.check_in, date_format),
        status.cooldown_days,
        format_date(status.checkout_date, date_format),
        format_remaining(status.remaining_days),
        marker
    )
}

pub fn print_status_list(statuses: &[CooldownStatus], date_format: &str) {
    if statuses.is_empty() {
        println!("No stays found.");
        return;
    }

    println!("\nStays:");
    for status in statuses {
        println!("  • {}", format_status_line(status, date_format));
    }
    println!();
}
