//! Conway's B3/S23 rule.

/// Offsets of the Moore neighbourhood in row-major order.
pub const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// State of a cell in the next generation.
pub fn next_state(alive: bool, live_neighbours: usize) -> bool {
    if alive {
        live_neighbours == 2 || live_neighbours == 3
    } else {
        live_neighbours == 3
    }
}
