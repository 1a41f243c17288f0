//! Display list painted onto a ratatui canvas.

use clockwall_core::{InitError, Point, Rgba};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line},
    },
};

/// A primitive recorded since the last clear.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Point,
        radius: i32,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
    },
}

/// Everything drawn on the surface for the current frame.
///
/// Coordinates are surface pixels with the origin at the top left; the
/// canvas scales them onto however many terminal cells are available.
#[derive(Debug, Clone)]
pub struct DisplayList {
    width: u32,
    height: u32,
    draw_color: Rgba,
    background: Rgba,
    shapes: Vec<Shape>,
}

impl DisplayList {
    pub fn new(width: u32, height: u32) -> Result<Self, InitError> {
        if width == 0 || height == 0 {
            return Err(InitError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            draw_color: Rgba::BLACK,
            background: Rgba::BLACK,
            shapes: Vec::new(),
        })
    }

    #[cfg(test)]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[cfg(test)]
    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    /// Drop all shapes and fill with the draw color.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.background = self.draw_color;
    }

    pub fn circle(&mut self, center: Point, radius: i32, color: Rgba) -> Result<(), String> {
        if radius <= 0 {
            return Err(format!("invalid circle radius {radius}"));
        }
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    pub fn line(&mut self, from: Point, to: Point, color: Rgba) {
        self.shapes.push(Shape::Line { from, to, color });
    }

    /// Canvas y grows upward, surface y grows downward.
    fn flip(&self, y: i32) -> f64 {
        f64::from(self.height) - f64::from(y)
    }
}

fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

impl Widget for &DisplayList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(to_color(self.background))
            .x_bounds([0.0, f64::from(self.width)])
            .y_bounds([0.0, f64::from(self.height)])
            .paint(|ctx| {
                for shape in &self.shapes {
                    match *shape {
                        Shape::Circle {
                            center,
                            radius,
                            color,
                        } => ctx.draw(&Circle {
                            x: f64::from(center.x),
                            y: self.flip(center.y),
                            radius: f64::from(radius),
                            color: to_color(color),
                        }),
                        Shape::Line { from, to, color } => ctx.draw(&Line::new(
                            f64::from(from.x),
                            self.flip(from.y),
                            f64::from(to.x),
                            self.flip(to.y),
                            to_color(color),
                        )),
                    }
                }
            })
            .render(area, buf);
    }
}
