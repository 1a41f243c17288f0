//! Fixed-size grid of clock faces.

use std::sync::Arc;

use crate::{CellWriter, ClockCell, GridLayout, RenderError, Renderer, Rgba};

/// Rectangular grid of clock faces, addressed by `(column, row)`.
#[derive(Debug)]
pub struct Grid {
    layout: GridLayout,
    /// Row-major storage.
    cells: Vec<Arc<ClockCell>>,
}

impl Grid {
    /// Create a grid of zeroed faces sized by `layout`.
    pub fn new(layout: GridLayout) -> Self {
        let cells = (0..layout.cell_count())
            .map(|_| Arc::new(ClockCell::new()))
            .collect();
        Self { layout, cells }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn columns(&self) -> usize {
        self.layout.columns
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.layout.columns && row < self.layout.rows)
            .then(|| row * self.layout.columns + column)
    }

    /// The face at `(column, row)`, if it is inside the grid.
    pub fn cell(&self, column: usize, row: usize) -> Option<&ClockCell> {
        self.index(column, row).map(|i| self.cells[i].as_ref())
    }

    /// Take the writer for `(column, row)`.
    ///
    /// Returns `None` outside the grid or when the cell's writer was already
    /// taken.
    pub fn writer(&self, column: usize, row: usize) -> Option<CellWriter> {
        let cell = &self.cells[self.index(column, row)?];
        cell.claim()
            .then(|| CellWriter::new(Arc::clone(cell), column, row))
    }

    /// Take the writers of every cell that does not have one yet, row-major.
    pub fn writers(&self) -> Vec<CellWriter> {
        self.positions()
            .filter_map(|(column, row)| self.writer(column, row))
            .collect()
    }

    /// Every `(column, row)` in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let columns = self.layout.columns;
        let rows = self.layout.rows;
        (0..rows).flat_map(move |row| (0..columns).map(move |column| (column, row)))
    }

    /// Draw every face in row-major order, stopping at the first failure.
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        color: Rgba,
    ) -> Result<(), RenderError> {
        for (column, row) in self.positions() {
            let cell = &self.cells[row * self.layout.columns + column];
            cell.draw(renderer, &self.layout, column, row, color)
                .map_err(|source| RenderError::Cell {
                    column,
                    row,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }
}
