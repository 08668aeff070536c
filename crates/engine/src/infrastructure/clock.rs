//! Wall-clock time for arrival deadlines.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::ClockPort;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl FixedClock {
    pub fn at_epoch_seconds(seconds: i64) -> Self {
        use chrono::TimeZone;

        Self(
            Utc.timestamp_opt(seconds, 0)
                .single()
                .expect("timestamp in range"),
        )
    }
}

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
