use crate::Cell;
use std::iter::FusedIterator;

/// Row-major traversal over the cells of a [`Grid`](super::Grid).
///
/// Every traversal owns its cursor, so any number of them may run side by side.
#[derive(Clone, Debug)]
pub struct Cells<'a> {
    cells: &'a [Cell],
    pos: usize,
}

impl<'a> Cells<'a> {
    pub(super) fn new(cells: &'a [Cell]) -> Self {
        Self { cells, pos: 0 }
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.cells.get(self.pos)?;
        self.pos += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cells.len() - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl FusedIterator for Cells<'_> {}
