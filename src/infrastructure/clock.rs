use chrono::{Local, NaiveDate};

use crate::domain::{Clock, FixedClock};

pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Uses `override_today` when given, the wall clock otherwise.
pub fn resolve_clock(override_today: Option<NaiveDate>) -> Box<dyn Clock> {
    match override_today {
        Some(date) => {
            tracing::info!(%date, "using fixed date");
            Box::new(FixedClock(date))
        }
        None => Box::new(SystemClock::new()),
    }
}
