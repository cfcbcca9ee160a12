use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::config::Config;
use crate::domain::{
    Clock, CooldownEngine, CooldownStatus, HotelRecord, RecordFields, EXPIRING_SOON_DAYS,
};
use crate::handlers::render::{format_date, format_remaining};
use crate::infrastructure::resolve_clock;

pub fn compute_status(
    name: &str,
    check_in: NaiveDate,
    cooldown: Option<u32>,
    today: NaiveDate,
) -> CooldownStatus {
    let record = HotelRecord::new(RecordFields::new(name, check_in, cooldown));
    CooldownEngine::status(&record, today)
}

pub fn handle_calc(
    name: &str,
    check_in: NaiveDate,
    cooldown: Option<u32>,
    today: Option<NaiveDate>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let today = resolve_clock(today).today();
    let status = compute_status(name, check_in, cooldown, today);
    tracing::debug!(?status, "computed cooldown");

    if json {
        let output =
            serde_json::to_string_pretty(&status).context("Failed to serialize result")?;
        println!("{}", output);
        return Ok(());
    }

    println!("\nStay: {}", status.name);
    println!("Check-in: {}", format_date(status.check_in, &config.date_format));
    println!("Cooldown: {} days", status.cooldown_days);
    println!(
        "Checkout: {}",
        format_date(status.checkout_date, &config.date_format)
    );
    println!("Status: {}", format_remaining(status.remaining_days));
    if status.expiring_soon {
        println!("⚠ Cooldown ends in less than {} days", EXPIRING_SOON_DAYS);
    }

    Ok(())
}
