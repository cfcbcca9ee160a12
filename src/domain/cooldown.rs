use chrono::{Days, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use super::record::HotelRecord;

/// Cooldown applied to a stay that has no custom cooldown.
pub const DEFAULT_COOLDOWN_DAYS: u32 = 30;

/// Stays with fewer remaining days than this are flagged as expiring soon.
pub const EXPIRING_SOON_DAYS: u64 = 7;

/// Days between check-in and the implicit checkout, before the cooldown starts.
const CHECKOUT_OFFSET_DAYS: u64 = 1;

/// Derived view of a record relative to a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CooldownStatus {
    pub id: Uuid,
    pub name: String,
    pub check_in: NaiveDate,
    pub cooldown_days: u32,
    pub checkout_date: NaiveDate,
    pub remaining_days: u64,
    pub expired: bool,
    pub expiring_soon: bool,
}

pub struct CooldownEngine;

impl CooldownEngine {
    /// The record's custom cooldown, or [`DEFAULT_COOLDOWN_DAYS`].
    pub fn cooldown_days(record: &HotelRecord) -> u32 {
        record.custom_cooldown_days.unwrap_or(DEFAULT_COOLDOWN_DAYS)
    }

    /// `check_in + 1 day + cooldown`. A step that overflows the calendar
    /// leaves its input date unchanged.
    pub fn checkout_date(record: &HotelRecord, _today: NaiveDate) -> NaiveDate {
        let checkout = add_days_or_keep(record.check_in, CHECKOUT_OFFSET_DAYS);
        add_days_or_keep(checkout, u64::from(Self::cooldown_days(record)))
    }

    pub fn remaining_days(record: &HotelRecord, today: NaiveDate) -> u64 {
        let checkout = Self::checkout_date(record, today);
        let days = checkout.signed_duration_since(today).num_days();
        u64::try_from(days).unwrap_or(0)
    }

    pub fn is_expired(record: &HotelRecord, today: NaiveDate) -> bool {
        Self::remaining_days(record, today) == 0
    }

    /// Still active, but with fewer than [`EXPIRING_SOON_DAYS`] left.
    pub fn is_expiring_soon(record: &HotelRecord, today: NaiveDate) -> bool {
        within_warning_window(Self::remaining_days(record, today))
    }

    pub fn status(record: &HotelRecord, today: NaiveDate) -> CooldownStatus {
        let remaining_days = Self::remaining_days(record, today);
        CooldownStatus {
            id: record.id(),
            name: record.name.clone(),
            check_in: record.check_in,
            cooldown_days: Self::cooldown_days(record),
            checkout_date: Self::checkout_date(record, today),
            remaining_days,
            expired: remaining_days == 0,
            expiring_soon: within_warning_window(remaining_days),
        }
    }

    /// Non-expired records whose name contains `query` (case-insensitive),
    /// in their original order. An empty query matches every name.
    pub fn visible_records<'a>(
        all: &'a [HotelRecord],
        query: &str,
        today: NaiveDate,
    ) -> Vec<&'a HotelRecord> {
        let needle = query.to_lowercase();
        all.iter()
            .filter(|record| !Self::is_expired(record, today))
            .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Stable: records with equal remaining days keep their relative order.
    pub fn sort_by_remaining(records: &mut [&HotelRecord], today: NaiveDate) {
        records.sort_by_key(|record| Self::remaining_days(record, today));
    }

    pub fn can_insert(all: &[HotelRecord], name: &str) -> bool {
        !all.iter().any(|record| record.name == name)
    }

    pub fn can_rename(all: &[HotelRecord], excluding_id: Uuid, name: &str) -> bool {
        !all
            .iter()
            .any(|record| record.id() != excluding_id && record.name == name)
    }
}

fn within_warning_window(remaining_days: u64) -> bool {
    remaining_days > 0 && remaining_days < EXPIRING_SOON_DAYS
}

fn add_days_or_keep(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}
