//! Hand animation for clockwall.
//!
//! Two kinds of drivers move the hands of a [`clockwall_core::Grid`]:
//! tweens, which interpolate every face from its current time to a target
//! over a fixed number of ticks, and the continuous driver, which follows
//! the wall clock once per second. Each driver owns the
//! [`clockwall_core::CellWriter`]s of the faces it moves and runs on its own
//! thread; nothing waits for it to finish.

mod continuous;
mod tween;
mod wall_clock;

pub use continuous::{advance_all, spawn_continuous, start_continuous};
pub use tween::{Tween, TweenTarget, cycles, spawn_tween, spawn_wave, wave_target};
pub use wall_clock::{SystemClock, WallClock, WallTime};
