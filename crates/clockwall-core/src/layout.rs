//! Grid geometry and timing.

use std::time::Duration;

/// A position on the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Dimensions, spacing and frame rate of a clock grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of clock columns.
    pub columns: usize,
    /// Number of clock rows.
    pub rows: usize,
    /// Radius of each clock face in pixels.
    pub clock_radius: i32,
    /// Spacing added around each face in pixels.
    pub gutter: i32,
    /// Render and animation steps per second.
    pub frame_rate: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 16,
            rows: 9,
            clock_radius: 32,
            gutter: 6,
            frame_rate: 60,
        }
    }
}

impl GridLayout {
    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Distance between the centers of two adjacent faces.
    pub fn pitch(&self) -> i32 {
        2 * (self.clock_radius + self.gutter)
    }

    /// Pixel center of the face at `(column, row)`.
    pub fn cell_center(&self, column: usize, row: usize) -> Point {
        let pitch = self.pitch();
        let x = column as i32 * pitch + 2 * self.clock_radius;
        let y = row as i32 * pitch + 2 * self.clock_radius - self.gutter;
        Point::new(x, y)
    }

    /// Smallest surface that shows every face without clipping.
    pub fn required_size(&self) -> (u32, u32) {
        if self.columns == 0 || self.rows == 0 {
            return (0, 0);
        }
        let last = self.cell_center(self.columns - 1, self.rows - 1);
        let width = last.x + self.clock_radius + 1;
        let height = last.y + self.clock_radius + 1;
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Time between two animation ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Delay the render loop waits between frames, in whole milliseconds.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_cell_center() {
        let layout = GridLayout::default();
        assert_eq!(layout.cell_center(0, 0), Point::new(64, 58));
    }

    #[test]
    fn test_centers_are_unique_and_monotonic() {
        let layout = GridLayout {
            columns: 5,
            rows: 4,
            ..GridLayout::default()
        };

        let mut seen = std::collections::HashSet::new();
        for row in 0..layout.rows {
            for column in 0..layout.columns {
                assert!(seen.insert(layout.cell_center(column, row)));
                if column > 0 {
                    let left = layout.cell_center(column - 1, row);
                    let here = layout.cell_center(column, row);
                    assert!(here.x > left.x);
                    assert_eq!(here.y, left.y);
                }
                if row > 0 {
                    let above = layout.cell_center(column, row - 1);
                    let here = layout.cell_center(column, row);
                    assert!(here.y > above.y);
                    assert_eq!(here.x, above.x);
                }
            }
        }
        assert_eq!(seen.len(), layout.cell_count());
    }

    #[test]
    fn test_reference_grid_fits_reference_surface() {
        let (width, height) = GridLayout::default().required_size();
        assert!(width <= 1280, "width {width}");
        assert!(height <= 720, "height {height}");
    }

    #[test]
    fn test_empty_grid_needs_no_surface() {
        let layout = GridLayout {
            columns: 0,
            rows: 3,
            ..GridLayout::default()
        };
        assert_eq!(layout.required_size(), (0, 0));
    }

    #[test]
    fn test_timing_at_sixty_fps() {
        let layout = GridLayout::default();
        assert_eq!(layout.frame_delay(), Duration::from_millis(16));
        assert_eq!(layout.tick_interval(), Duration::from_secs(1) / 60);
    }
}
