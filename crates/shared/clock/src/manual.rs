use chrono::{Duration, Utc};
use parking_lot::RwLock;
use tally_core::Timestamp;
use tally_ports::Clock;

/// Clock whose time only changes when explicitly moved
///
/// Reads never advance it, so a sequence of commits against one
/// `ManualClock` all carry the same timestamp until the test calls
/// [`advance`](Self::advance) or [`set_time`](Self::set_time).
#[derive(Debug)]
pub struct ManualClock {
    current_time: RwLock<Timestamp>,
}

impl ManualClock {
    pub fn new(initial_time: Timestamp) -> Self {
        Self {
            current_time: RwLock::new(initial_time),
        }
    }

    /// Freeze at the current wall-clock time
    pub fn frozen_now() -> Self {
        Self::new(Utc::now())
    }

    /// Move time forward by `duration`
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current_time.write();
        *current += duration;
    }

    /// Jump to an arbitrary time, possibly backwards
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::frozen_now()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
