use cell_grid::Grid;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_neighbours_in_bounds(
        rows in 1usize..12,
        cols in 1usize..12,
        r in 0usize..12,
        c in 0usize..12,
    ) {
        let (r, c) = (r % rows, c % cols);
        let grid = Grid::new(rows, cols).unwrap();
        let neighbours: Vec<_> = grid.neighbours(r, c).map(|cell| cell.position()).collect();
        prop_assert!(neighbours.len() <= 8);
        prop_assert!(!neighbours.contains(&(r, c)));
        for &(nr, nc) in &neighbours {
            prop_assert!(nr < rows && nc < cols);
            prop_assert!(nr.abs_diff(r) <= 1 && nc.abs_diff(c) <= 1);
        }
    }

    #[test]
    fn prop_step_preserves_shape(rows in 1usize..16, cols in 1usize..16, seed: u64) {
        let mut grid = Grid::random(rows, cols, Some(seed)).unwrap();
        grid.step();
        prop_assert_eq!((grid.rows(), grid.cols()), (rows, cols));
        prop_assert_eq!(grid.iter().len(), rows * cols);
        for (i, cell) in grid.iter().enumerate() {
            prop_assert_eq!(cell.position(), (i / cols, i % cols));
        }
    }

    #[test]
    fn prop_dead_grid_stays_dead(rows in 1usize..10, cols in 1usize..10) {
        let mut grid = Grid::new(rows, cols).unwrap();
        grid.step();
        prop_assert_eq!(grid.population(), 0);
    }

    #[test]
    fn prop_pattern_round_trip(rows in 1usize..8, cols in 1usize..8, seed: u64) {
        let grid = Grid::random(rows, cols, Some(seed)).unwrap();
        let text: String = grid
            .rows_iter()
            .map(|row| row.iter().map(|c| if c.is_alive() { '1' } else { '0' }).collect::<String>())
            .map(|line| line + "\n")
            .collect();
        prop_assert_eq!(Grid::from_pattern(&text).unwrap(), grid);
    }
}
