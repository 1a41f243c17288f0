//! Real-time hand movement following the wall clock.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use clockwall_core::{CellWriter, Grid};
use tracing::debug;

use crate::WallClock;

/// Period of the continuous driver.
const TICK: Duration = Duration::from_secs(1);

/// Point every face's minute hand at the current second.
///
/// Hour hands are untouched.
pub fn advance_all<C: WallClock + ?Sized>(writers: &[CellWriter], clock: &C) {
    let seconds = f64::from(clock.now().second);
    for writer in writers {
        writer.advance_second(seconds);
    }
}

/// Run one shared background thread that advances `writers` every second.
///
/// The faces are set to the current time first: the minute hand to the
/// current second and the hour hand to the current hour, which is never
/// updated again. The thread runs until the process exits.
pub fn spawn_continuous<C: WallClock>(writers: Vec<CellWriter>, clock: C) -> JoinHandle<()> {
    let now = clock.now();
    for writer in &writers {
        writer.show(f64::from(now.second), now.dial_hour());
    }
    debug!(cells = writers.len(), "continuous driver started");

    thread::spawn(move || {
        let start = Instant::now();
        let mut tick: u32 = 0;
        loop {
            tick = tick.wrapping_add(1);
            let deadline = start + TICK * tick;
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
            advance_all(&writers, &clock);
        }
    })
}

/// Drive every face of `grid` that has no driver yet from `clock`.
pub fn start_continuous<C: WallClock>(grid: &Grid, clock: C) -> JoinHandle<()> {
    spawn_continuous(grid.writers(), clock)
}
