pub mod clock;
pub mod cooldown;
pub mod error;
pub mod ledger;
pub mod record;

pub use clock::{Clock, FixedClock};
pub use cooldown::{CooldownEngine, CooldownStatus, DEFAULT_COOLDOWN_DAYS, EXPIRING_SOON_DAYS};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use record::{HotelRecord, RecordFields};
