//! A single clock face and the handle used to animate it.

use std::f64::consts::PI;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::{GridLayout, Point, RenderError, Renderer, Rgba, hour_angle, minute_angle};

/// Minute hand length as a fraction of the face radius.
const MINUTE_HAND: f64 = 0.8;

/// Hour hand length as a fraction of the face radius.
const HOUR_HAND: f64 = 0.6;

/// Rotates the zero angle from 3 o'clock (screen +x) to 12 o'clock.
const TWELVE_OCLOCK: f64 = 3.0 * PI / 2.0;

/// `f64` stored in an `AtomicU64` by bit pattern.
#[derive(Debug, Default)]
struct AtomicF64(AtomicU64);

impl AtomicF64 {
    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// Rendered hand angles of one face, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandAngles {
    pub minute: f64,
    pub hour: f64,
}

/// State of one clock face.
///
/// `minute` and `hour` are the logical values last requested; the angles are
/// what gets drawn. They agree except while a tween is catching the angles up.
/// Values are never wrapped into their natural range and only mean anything
/// as angles.
///
/// Fields are relaxed atomics: one [`CellWriter`] stores, the render loop
/// loads, and the newest store wins. Minute and hour may be observed from
/// different updates within one frame.
#[derive(Debug, Default)]
pub struct ClockCell {
    minute: AtomicF64,
    hour: AtomicF64,
    minute_angle: AtomicF64,
    hour_angle: AtomicF64,
    claimed: AtomicBool,
}

impl ClockCell {
    /// A face showing 12:00 with both values at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical minute value.
    pub fn minute(&self) -> f64 {
        self.minute.load()
    }

    /// Logical hour value.
    pub fn hour(&self) -> f64 {
        self.hour.load()
    }

    /// Angles the hands are currently drawn at.
    pub fn angles(&self) -> HandAngles {
        HandAngles {
            minute: self.minute_angle.load(),
            hour: self.hour_angle.load(),
        }
    }

    /// Mark the cell as having a writer. Returns `false` if it already had one.
    pub(crate) fn claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::AcqRel)
    }

    /// Draw the face at its grid position.
    ///
    /// Issues a circle for the rim followed by the minute and hour hands.
    /// Stops at the first primitive the renderer rejects.
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        layout: &GridLayout,
        column: usize,
        row: usize,
        color: Rgba,
    ) -> Result<(), RenderError> {
        let center = layout.cell_center(column, row);
        let radius = layout.clock_radius;
        let angles = self.angles();

        if !renderer.draw_aa_circle(center, radius, color) {
            return Err(rejected(renderer, "circle"));
        }

        let minute_end = hand_end(center, f64::from(radius) * MINUTE_HAND, angles.minute);
        if !renderer.draw_aa_line(center, minute_end, color) {
            return Err(rejected(renderer, "minute hand"));
        }

        let hour_end = hand_end(center, f64::from(radius) * HOUR_HAND, angles.hour);
        if !renderer.draw_aa_line(center, hour_end, color) {
            return Err(rejected(renderer, "hour hand"));
        }

        Ok(())
    }
}

fn rejected<R: Renderer + ?Sized>(renderer: &R, primitive: &'static str) -> RenderError {
    RenderError::Primitive {
        primitive,
        message: renderer.last_error(),
    }
}

/// Tip of a hand of `length` pixels at `angle` radians from 12 o'clock.
fn hand_end(center: Point, length: f64, angle: f64) -> Point {
    let theta = TWELVE_OCLOCK + angle;
    // Offsets truncate toward zero after a half-pixel bias.
    let dx = (length * theta.cos() - 0.5) as i32;
    let dy = (length * theta.sin() - 0.5) as i32;
    Point::new(center.x + dx, center.y + dy)
}

/// Exclusive write access to one [`ClockCell`].
///
/// The grid hands out at most one writer per cell and writers cannot be
/// cloned, so every cell has a single writer for its whole life.
#[derive(Debug)]
pub struct CellWriter {
    cell: Arc<ClockCell>,
    column: usize,
    row: usize,
}

impl CellWriter {
    pub(crate) fn new(cell: Arc<ClockCell>, column: usize, row: usize) -> Self {
        Self { cell, column, row }
    }

    /// Column of the cell being written.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Row of the cell being written.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Read access to the cell being written.
    pub fn cell(&self) -> &ClockCell {
        &self.cell
    }

    /// Store new logical values without moving the hands.
    pub fn set_values(&self, minute: f64, hour: f64) {
        self.cell.minute.store(minute);
        self.cell.hour.store(hour);
    }

    /// Move the hands to the given angles.
    pub fn set_angles(&self, angles: HandAngles) {
        self.cell.minute_angle.store(angles.minute);
        self.cell.hour_angle.store(angles.hour);
    }

    /// Turn both hands by the given amounts.
    pub fn rotate(&self, minute_delta: f64, hour_delta: f64) {
        let angles = self.cell.angles();
        self.set_angles(HandAngles {
            minute: angles.minute + minute_delta,
            hour: angles.hour + hour_delta,
        });
    }

    /// Point the minute hand at the given second of the current minute.
    ///
    /// The hour hand is left alone.
    pub fn advance_second(&self, seconds: f64) {
        self.cell.minute.store(seconds);
        self.cell.minute_angle.store(minute_angle(seconds));
    }

    /// Set values and snap the hands to them.
    pub fn show(&self, minute: f64, hour: f64) {
        self.set_values(minute, hour);
        self.set_angles(HandAngles {
            minute: minute_angle(minute),
            hour: hour_angle(hour),
        });
    }
}
