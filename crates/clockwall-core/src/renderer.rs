//! The drawing capability a backend has to provide.

use crate::{Point, RenderError, Rgba};

/// Primitive drawing operations on a surface.
///
/// Creating the surface is the backend's constructor and releasing it is its
/// `Drop`. Primitive calls report success with a `bool`, mirroring immediate
/// mode graphics libraries; on `false` the caller reads [`Renderer::last_error`]
/// to build a [`RenderError`].
pub trait Renderer {
    /// Set the color used by [`Renderer::clear`].
    fn set_draw_color(&mut self, color: Rgba);

    /// Erase the surface with the current draw color.
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Draw an anti-aliased circle outline.
    fn draw_aa_circle(&mut self, center: Point, radius: i32, color: Rgba) -> bool;

    /// Draw an anti-aliased line segment.
    fn draw_aa_line(&mut self, from: Point, to: Point, color: Rgba) -> bool;

    /// Show everything drawn since the last clear.
    fn present(&mut self) -> Result<(), RenderError>;

    /// Message describing the most recent rejected call.
    fn last_error(&self) -> String;
}
