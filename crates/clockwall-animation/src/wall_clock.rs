//! Wall-clock source for the continuous driver.

use chrono::{Local, Timelike};

/// A time of day broken into clock components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallTime {
    /// Hour of the day, 0-23.
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallTime {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Hour hand value on a 12-hour dial, including the minutes' share.
    pub fn dial_hour(&self) -> f64 {
        f64::from(self.hour % 12) + f64::from(self.minute) / 60.0
    }
}

/// Source of the current time of day.
pub trait WallClock: Send + 'static {
    fn now(&self) -> WallTime;
}

/// The local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        // Leap seconds show up as second 59 with extra nanoseconds.
        WallTime::new(now.hour(), now.minute(), now.second())
    }
}
