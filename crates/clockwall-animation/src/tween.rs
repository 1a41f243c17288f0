//! Interpolated hand movement from one time to another.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use clockwall_core::{CellWriter, Grid, hour_angle, minute_angle};
use tracing::{debug, trace};

/// Where a tween should end up and how long it should take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenTarget {
    pub minute: f64,
    pub hour: f64,
    pub duration: Duration,
}

impl TweenTarget {
    pub fn new(minute: f64, hour: f64, duration: Duration) -> Self {
        Self {
            minute,
            hour,
            duration,
        }
    }
}

/// Number of ticks a tween of `duration` takes at `frame_rate`.
pub fn cycles(frame_rate: u32, duration: Duration) -> u32 {
    (f64::from(frame_rate) * duration.as_secs_f64()).round() as u32
}

/// Target for the face at `(column, row)` in the staggered wave.
///
/// Faces further from the top-left corner take longer, one extra second per
/// step along either axis.
pub fn wave_target(column: usize, row: usize, minute: f64, hour: f64) -> TweenTarget {
    let seconds = (column + row + 1) as u64;
    TweenTarget::new(minute, hour, Duration::from_secs(seconds))
}

/// An in-progress tween of one face.
///
/// The angle deltas are fixed when the tween begins. Each [`Tween::step`]
/// turns the hands by an equal share, and after [`Tween::cycles`] steps the
/// hands have turned by the full delta.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    minute_step: f64,
    hour_step: f64,
    cycles: u32,
    done: u32,
}

impl Tween {
    /// Start tweening the writer's face toward `target`.
    ///
    /// The face's logical values jump to the target right away; only the
    /// drawn angles follow over time. A duration too short for a single tick
    /// still takes one step.
    pub fn begin(writer: &CellWriter, target: &TweenTarget, frame_rate: u32) -> Self {
        let cell = writer.cell();
        let minute_delta = minute_angle(target.minute) - minute_angle(cell.minute());
        let hour_delta = hour_angle(target.hour) - hour_angle(cell.hour());
        writer.set_values(target.minute, target.hour);

        let cycles = cycles(frame_rate, target.duration).max(1);
        Self {
            minute_step: minute_delta / f64::from(cycles),
            hour_step: hour_delta / f64::from(cycles),
            cycles,
            done: 0,
        }
    }

    /// Total number of steps.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn remaining(&self) -> u32 {
        self.cycles - self.done
    }

    pub fn is_finished(&self) -> bool {
        self.done >= self.cycles
    }

    /// Apply one step. Returns `true` while steps remain afterwards.
    pub fn step(&mut self, writer: &CellWriter) -> bool {
        if self.is_finished() {
            return false;
        }
        writer.rotate(self.minute_step, self.hour_step);
        self.done += 1;
        !self.is_finished()
    }
}

/// Begin a tween and run its ticks on a background thread.
///
/// The logical values are updated before this returns. The thread steps the
/// tween once every `1 / frame_rate` seconds and hands the writer back when
/// done.
pub fn spawn_tween(
    writer: CellWriter,
    target: TweenTarget,
    frame_rate: u32,
) -> JoinHandle<CellWriter> {
    let mut tween = Tween::begin(&writer, &target, frame_rate);
    let interval = Duration::from_secs(1) / frame_rate.max(1);
    debug!(
        column = writer.column(),
        row = writer.row(),
        cycles = tween.cycles(),
        "tween started"
    );

    thread::spawn(move || {
        let start = Instant::now();
        let mut tick: u32 = 0;
        loop {
            tick += 1;
            // Sleep to an absolute deadline so oversleeping doesn't accumulate.
            let deadline = start + interval * tick;
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
            if !tween.step(&writer) {
                break;
            }
        }
        trace!(column = writer.column(), row = writer.row(), "tween finished");
        writer
    })
}

/// Tween every face of `grid` that has no driver yet toward the same time,
/// staggered by [`wave_target`].
pub fn spawn_wave(grid: &Grid, minute: f64, hour: f64) -> Vec<JoinHandle<CellWriter>> {
    let frame_rate = grid.layout().frame_rate;
    grid.writers()
        .into_iter()
        .map(|writer| {
            let target = wave_target(writer.column(), writer.row(), minute, hour);
            spawn_tween(writer, target, frame_rate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use clockwall_core::GridLayout;

    use super::*;

    const EPS: f64 = 1e-9;

    fn one_cell() -> Grid {
        Grid::new(GridLayout {
            columns: 1,
            rows: 1,
            ..GridLayout::default()
        })
    }

    #[test]
    fn test_cycles_at_sixty_fps() {
        assert_eq!(cycles(60, Duration::from_secs(1)), 60);
        assert_eq!(cycles(60, Duration::from_secs(3)), 180);
        assert_eq!(cycles(60, Duration::from_millis(500)), 30);
        assert_eq!(cycles(60, Duration::ZERO), 0);
    }

    #[test]
    fn test_half_way_to_thirty_minutes() {
        let grid = one_cell();
        let writer = grid.writer(0, 0).unwrap();
        let target = TweenTarget::new(30.0, 0.0, Duration::from_secs(1));
        let mut tween = Tween::begin(&writer, &target, 60);
        assert_eq!(tween.cycles(), 60);

        for _ in 0..30 {
            assert!(tween.step(&writer));
        }
        let angles = grid.cell(0, 0).unwrap().angles();
        assert!((angles.minute - PI / 2.0).abs() < EPS);
        assert_eq!(tween.remaining(), 30);
    }

    #[test]
    fn test_tween_reaches_full_delta_after_all_cycles() {
        let grid = one_cell();
        let writer = grid.writer(0, 0).unwrap();
        writer.show(10.0, 2.0);
        let target = TweenTarget::new(240.0, 9.0, Duration::from_secs(7));
        let mut tween = Tween::begin(&writer, &target, 60);

        let mut steps = 0;
        while tween.step(&writer) {
            steps += 1;
        }
        assert_eq!(steps + 1, 7 * 60);
        assert!(tween.is_finished());
        assert!(!tween.step(&writer));

        let angles = grid.cell(0, 0).unwrap().angles();
        assert!((angles.minute - minute_angle(240.0)).abs() < EPS);
        assert!((angles.hour - hour_angle(9.0)).abs() < EPS);
    }

    #[test]
    fn test_logical_values_jump_to_target() {
        let grid = one_cell();
        let writer = grid.writer(0, 0).unwrap();
        let target = TweenTarget::new(240.0, 9.0, Duration::from_secs(2));
        let _tween = Tween::begin(&writer, &target, 60);

        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.minute(), 240.0);
        assert_eq!(cell.hour(), 9.0);
        assert_eq!(cell.angles().minute, 0.0);
    }

    #[test]
    fn test_tween_to_same_time_leaves_angles() {
        let grid = one_cell();
        let writer = grid.writer(0, 0).unwrap();
        writer.show(20.0, 5.0);
        let before = grid.cell(0, 0).unwrap().angles();

        let target = TweenTarget::new(20.0, 5.0, Duration::from_secs(1));
        let mut tween = Tween::begin(&writer, &target, 60);
        while tween.step(&writer) {}

        assert_eq!(grid.cell(0, 0).unwrap().angles(), before);
    }

    #[test]
    fn test_second_tween_starts_from_previous_target() {
        let grid = one_cell();
        let writer = grid.writer(0, 0).unwrap();
        let first = TweenTarget::new(30.0, 0.0, Duration::from_secs(1));
        let mut tween = Tween::begin(&writer, &first, 60);
        // Interrupt half way; the next delta is from 30, not from the angle.
        for _ in 0..30 {
            tween.step(&writer);
        }
        let second = TweenTarget::new(45.0, 0.0, Duration::from_secs(1));
        let mut tween = Tween::begin(&writer, &second, 60);
        while tween.step(&writer) {}

        let angles = grid.cell(0, 0).unwrap().angles();
        assert!((angles.minute - (PI / 2.0 + PI / 2.0)).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_takes_one_step() {
        let grid = one_cell();
        let writer = grid.writer(0, 0).unwrap();
        let target = TweenTarget::new(15.0, 3.0, Duration::ZERO);
        let mut tween = Tween::begin(&writer, &target, 60);
        assert_eq!(tween.cycles(), 1);
        assert!(!tween.step(&writer));

        let angles = grid.cell(0, 0).unwrap().angles();
        assert!((angles.minute - PI / 2.0).abs() < EPS);
        assert!((angles.hour - PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_wave_duration_grows_with_position() {
        assert_eq!(wave_target(0, 0, 240.0, 9.0).duration, Duration::from_secs(1));
        assert_eq!(wave_target(3, 2, 240.0, 9.0).duration, Duration::from_secs(6));
        assert_eq!(wave_target(15, 8, 240.0, 9.0).duration, Duration::from_secs(24));
    }

    #[test]
    fn test_spawned_tween_finishes_and_returns_writer() {
        let grid = one_cell();
        let writer = grid.writer(0, 0).unwrap();
        let target = TweenTarget::new(30.0, 6.0, Duration::from_millis(100));
        let handle = spawn_tween(writer, target, 60);

        assert_eq!(grid.cell(0, 0).unwrap().minute(), 30.0);
        let writer = handle.join().unwrap();
        assert_eq!((writer.column(), writer.row()), (0, 0));

        let angles = grid.cell(0, 0).unwrap().angles();
        assert!((angles.minute - PI).abs() < EPS);
        assert!((angles.hour - PI).abs() < EPS);
    }

    #[test]
    fn test_spawn_wave_drives_every_free_cell() {
        let layout = GridLayout {
            columns: 2,
            rows: 1,
            frame_rate: 20,
            ..GridLayout::default()
        };
        let grid = Grid::new(layout);
        let handles = spawn_wave(&grid, 15.0, 3.0);
        assert_eq!(handles.len(), 2);
        // Every cell is now owned by a driver.
        assert!(grid.writer(0, 0).is_none());

        for handle in handles {
            handle.join().unwrap();
        }
        for (column, row) in grid.positions() {
            let angles = grid.cell(column, row).unwrap().angles();
            assert!((angles.minute - PI / 2.0).abs() < EPS);
        }
    }
}
