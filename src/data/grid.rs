/// A rectangular array of boolean cell states.
///
/// Addressed by from-zero (row, col) notation, such that the following
/// shows coordinates for cells in a 3 x 3 grid:
///
/// ```text
/// [ (0,0) (0,1) (0,2) ]
/// [ (1,0) (1,1) (1,2) ]
/// [ (2,0) (2,1) (2,2) ]
/// ```
///
/// Storage is a flat vector in row-major order. A `Grid` holds state only;
/// the life rule lives in [`crate::engine`], which replaces an engine's grid
/// wholesale each generation rather than mutating it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Builds a grid by calling `f(row, col)` for every cell in row-major
    /// order (row 0 first, columns left to right within each row).
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Grid
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the cell at (row, col) is alive.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height && col < self.width, "cell out of bounds");
        self.cells[row * self.width + col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < self.height && col < self.width, "cell out of bounds");
        self.cells[row * self.width + col] = alive;
    }

    /// Iterates over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Number of live cells in the grid.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
