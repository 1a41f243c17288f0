//! Core types for the clockwall clock grid.
//!
//! This crate holds everything that does not depend on a concrete drawing
//! backend: the angle model, clock cells and the grid that owns them, the
//! layout configuration, the [`Renderer`] capability and the render loop
//! that drives it.

mod angle;
mod cell;
mod color;
mod error;
mod grid;
mod layout;
mod render_loop;
mod renderer;

pub use angle::{HOUR_PERIOD, MINUTE_PERIOD, hour_angle, minute_angle};
pub use cell::{CellWriter, ClockCell, HandAngles};
pub use color::{ColorTheme, Rgba};
pub use error::{InitError, RenderError};
pub use grid::Grid;
pub use layout::{GridLayout, Point};
pub use render_loop::{FramePacer, LoopState, Pace, RenderLoop, SleepPacer};
pub use renderer::Renderer;
