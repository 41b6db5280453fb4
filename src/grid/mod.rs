mod iter;

pub use iter::Cells;

use crate::{parse_pattern, rule, Cell, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::{fmt, path::Path, str::FromStr};

/// Bounded `rows x cols` field of cells, stored row-major.
///
/// Cells outside the field are considered dead; there is no wraparound.
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: Vec<Cell>,
    cells_next: Vec<Cell>,
    rows: usize,
    cols: usize,
    generation: u64,
}

impl Grid {
    /// Create a grid where every cell is dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let size = Self::checked_size(rows, cols)?;
        Self::from_cells(rows, cols, vec![false; size])
    }

    /// Create a grid where every cell is alive with probability 1/2.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self, GridError> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::random_with(rows, cols, &mut rng)
    }

    /// Same as [`Grid::random`], but draws from a caller-provided source of randomness.
    pub fn random_with<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, GridError> {
        let size = Self::checked_size(rows, cols)?;
        let states = (0..size).map(|_| rng.gen_bool(0.5)).collect();
        Self::from_cells(rows, cols, states)
    }

    /// Create a grid, either blank or randomly seeded.
    pub fn with_dimensions(
        rows: usize,
        cols: usize,
        randomize: bool,
        seed: Option<u64>,
    ) -> Result<Self, GridError> {
        if randomize {
            Self::random(rows, cols, seed)
        } else {
            Self::new(rows, cols)
        }
    }

    /// Number of cells of a `rows x cols` grid, if such a grid can exist.
    fn checked_size(rows: usize, cols: usize) -> Result<usize, GridError> {
        let max_cells = isize::MAX as usize / std::mem::size_of::<Cell>();
        rows.checked_mul(cols)
            .filter(|&size| size != 0 && size <= max_cells)
            .ok_or(GridError::InvalidDimension { rows, cols })
    }

    /// Create a grid from a row-major vector of states.
    ///
    /// # Panics
    ///
    /// If `states.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, states: Vec<bool>) -> Result<Self, GridError> {
        let size = Self::checked_size(rows, cols)?;
        assert_eq!(states.len(), size);
        let cells_curr: Vec<Cell> = states
            .into_iter()
            .enumerate()
            .map(|(i, alive)| Cell::new(i / cols, i % cols, alive))
            .collect();
        Ok(Self {
            cells_next: cells_curr.clone(),
            cells_curr,
            rows,
            cols,
            generation: 0,
        })
    }

    /// Parse a pattern of `0`/`1` rows into a grid of the same shape.
    pub fn from_pattern(data: &str) -> Result<Self, GridError> {
        let (rows, cols, states) = parse_pattern(data)?;
        Self::from_cells(rows, cols, states)
    }

    /// Read a pattern file and parse it with [`Grid::from_pattern`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| GridError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_pattern(&data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of generations computed since the grid was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells_curr[col + row * self.cols])
        } else {
            None
        }
    }

    /// Set the state of the cell at (row, col).
    ///
    /// # Panics
    ///
    /// If the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < self.rows && col < self.cols);
        self.cells_curr[col + row * self.cols].alive = alive;
    }

    /// Cells of the Moore neighbourhood of (row, col) that lie inside the grid,
    /// in row-major order.
    ///
    /// # Panics
    ///
    /// If the position is outside the grid.
    pub fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = &Cell> + '_ {
        assert!(row < self.rows && col < self.cols);
        rule::NEIGHBOUR_OFFSETS.iter().filter_map(move |&(di, dj)| {
            let ni = row.checked_add_signed(di).filter(|&ni| ni < self.rows)?;
            let nj = col.checked_add_signed(dj).filter(|&nj| nj < self.cols)?;
            Some(&self.cells_curr[nj + ni * self.cols])
        })
    }

    pub fn live_neighbours(&self, row: usize, col: usize) -> usize {
        self.neighbours(row, col).filter(|c| c.is_alive()).count()
    }

    /// Advance the grid by one generation.
    ///
    /// The next generation is written into a separate buffer, so every cell
    /// sees only the states of the current one.
    pub fn step(&mut self) {
        for i in 0..self.cells_curr.len() {
            let neibs = self.live_neighbours(i / self.cols, i % self.cols);
            self.cells_next[i].alive = rule::next_state(self.cells_curr[i].alive, neibs);
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
    }

    /// Advance the grid by `n` generations.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|c| c.is_alive()).count()
    }

    /// Row-major traversal with its own cursor; call again to start over.
    pub fn iter(&self) -> Cells<'_> {
        Cells::new(&self.cells_curr)
    }

    /// Rows of the grid, top to bottom.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.cells_curr.chunks_exact(self.cols)
    }

    /// Textual dump of the grid, see the [`fmt::Display`] impl.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// One-line summary of the grid state.
    pub fn statistics(&self) -> String {
        format!(
            "{}x{} grid, generation {}, population {}",
            self.rows,
            self.cols,
            self.generation,
            self.population()
        )
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells_curr == other.cells_curr
    }
}

impl Eq for Grid {}

/// One `[1, 0, ...]` line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            f.write_str("[")?;
            for (j, cell) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", cell.is_alive() as u8)?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pattern(s)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
