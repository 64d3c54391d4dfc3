//! The simulation engine: seeded grid initialization and the generation
//! update rule.
//!
//! Initialization is pinned to a specific generator so that a shared token
//! reproduces the exact same grid everywhere: the seed's IEEE-754 bit
//! pattern seeds a PCG XSL 128/64 MCG ([`rand_pcg::Pcg64Mcg`]), one `f64`
//! in [0,1) is drawn per cell in row-major order, and a cell starts alive
//! iff its draw is strictly greater than 0.5. Changing any part of that
//! recipe is a compatibility break.

use crate::config::Config;
use crate::data::Grid;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use thiserror::Error;

/// The eight Moore-neighbourhood offsets, (row, col) relative to the centre.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Runs one simulation. Owns the current grid; the configuration is fixed
/// for the engine's lifetime. Restarting with different parameters means
/// constructing a new engine, never mutating this one.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    grid: Grid,
}

impl Engine {
    /// Validates the grid dimensions and builds the initial grid from the
    /// configured seed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDimensions`] if either dimension is not
    /// strictly positive. This is the single validation point for values
    /// that `Config` carries unchecked.
    pub fn new(config: Config) -> Result<Engine, EngineError> {
        if config.num_cells_x <= 0 || config.num_cells_y <= 0 {
            return Err(EngineError::InvalidDimensions {
                width: config.num_cells_x,
                height: config.num_cells_y,
            });
        }
        let width = config.num_cells_x as usize;
        let height = config.num_cells_y as usize;
        let mut rng = Pcg64Mcg::from_seed(u128::from(config.seed.to_bits()).to_le_bytes());
        let grid = Grid::from_fn(width, height, |_, _| rng.gen::<f64>() > 0.5);
        Ok(Engine { config, grid })
    }

    /// The current generation's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Advances the simulation by one generation.
    ///
    /// The next grid is computed as a fresh buffer read only against the
    /// previous one, then swapped in whole, so a caller never observes a
    /// mix of old and new generation values.
    pub fn advance(&mut self) {
        let prev = &self.grid;
        let wrap = self.config.wrap_around;
        let next = Grid::from_fn(prev.width(), prev.height(), |row, col| {
            let neighbors = count_alive_neighbors(prev, row, col, wrap);
            next_state(prev.get(row, col), neighbors)
        });
        self.grid = next;
    }
}

/// The survival/birth rule: a live cell survives with 2 or 3 live
/// neighbours, a dead cell is born with exactly 3, everything else dies.
fn next_state(alive: bool, neighbors: u8) -> bool {
    (alive && neighbors == 2) || neighbors == 3
}

/// Counts live cells in the Moore neighbourhood of (row, col).
///
/// With `wrap`, coordinates are taken floor-mod the grid extents, so edge
/// cells see the opposite edge (toroidal topology). Without it, off-grid
/// positions contribute nothing and edge cells simply have fewer
/// neighbours.
pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize, wrap: bool) -> u8 {
    let height = grid.height() as i64;
    let width = grid.width() as i64;
    let mut count = 0;
    for (d_row, d_col) in NEIGHBOR_OFFSETS {
        let mut r = row as i64 + d_row;
        let mut c = col as i64 + d_col;
        if wrap {
            r = r.rem_euclid(height);
            c = c.rem_euclid(width);
        } else if r < 0 || r >= height || c < 0 || c >= width {
            continue;
        }
        if grid.get(r as usize, c as usize) {
            count += 1;
        }
    }
    count
}

/// Engine construction failed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configured grid dimensions are not both strictly positive.
    #[error("invalid grid dimensions: {width} x {height} (both must be > 0)")]
    InvalidDimensions {
        /// Configured width in cells.
        width: i32,
        /// Configured height in cells.
        height: i32,
    },
}
