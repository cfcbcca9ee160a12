pub mod clock;

pub use clock::{resolve_clock, SystemClock};
