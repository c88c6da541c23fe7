//! Tally Clock Infrastructure
//!
//! Time sources for stamping ledger transactions:
//!
//! - [`SystemClock`]: wall-clock time, for production use
//! - [`ManualClock`]: frozen time that only moves when told to, for
//!   deterministic tests
//!
//! ## Usage
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use tally_clock::{Clock, ManualClock};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
//! let clock = ManualClock::new(start);
//! assert_eq!(clock.now(), start);
//!
//! clock.advance(Duration::minutes(5));
//! assert_eq!(clock.now(), start + Duration::minutes(5));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use tally_ports::Clock;
