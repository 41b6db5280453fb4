/// A single position of a [`Grid`](crate::Grid) together with its state.
///
/// Coordinates are fixed at creation; only the owning grid flips `alive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
    pub(crate) alive: bool,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, alive: bool) -> Self {
        Self { row, col, alive }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// `(row, col)` of the cell in its grid.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn test_accessors() {
        let cell = Cell::new(3, 7, true);
        assert_eq!(cell.position(), (3, 7));
        assert_eq!((cell.row(), cell.col()), (3, 7));
        assert!(cell.is_alive());
        assert!(!Cell::new(0, 0, false).is_alive());
    }
}
