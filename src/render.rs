//! The boundary to the rendering collaborator.
//!
//! The core never draws; it tells a [`Surface`] which pixel rect each cell
//! occupies and whether the cell is alive. [`TextSurface`] is the one
//! implementation shipped here, used by the CLI host to print generations
//! to the terminal.

use crate::data::Grid;

/// A drawing surface that can fill one cell-sized rectangle at a time.
pub trait Surface {
    /// Fills the axis-aligned rect at (x, y) with the given edge lengths,
    /// dark if `alive`, light otherwise.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, alive: bool);
}

/// Issues one fill per cell: cell (row, col) occupies the square at
/// `(col * cell_size, row * cell_size)` with edge `cell_size`.
pub fn draw_grid<S: Surface>(grid: &Grid, cell_size: i32, surface: &mut S) {
    for (row, cells) in grid.rows().enumerate() {
        for (col, &alive) in cells.iter().enumerate() {
            surface.fill_rect(
                col as i32 * cell_size,
                row as i32 * cell_size,
                cell_size,
                cell_size,
                alive,
            );
        }
    }
}

/// Renders cells as characters, one per cell, for terminal output.
#[derive(Debug)]
pub struct TextSurface {
    cell_size: i32,
    rows: Vec<String>,
}

impl TextSurface {
    pub fn new(cell_size: i32) -> TextSurface {
        TextSurface {
            cell_size,
            rows: Vec::new(),
        }
    }

    /// The rendered frame, one line per grid row.
    pub fn frame(&self) -> String {
        self.rows.join("\n")
    }
}

impl Surface for TextSurface {
    fn fill_rect(&mut self, x: i32, y: i32, _width: i32, _height: i32, alive: bool) {
        // Rects arrive on a uniform cell_size lattice, so dividing recovers
        // the cell coordinates.
        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        while self.rows.len() <= row {
            self.rows.push(String::new());
        }
        let line = &mut self.rows[row];
        while line.chars().count() <= col {
            line.push('.');
        }
        if alive {
            line.replace_range(col..col + 1, "#");
        }
    }
}
