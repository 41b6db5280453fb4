use crate::{grid_dimensions, Grid, GridError};
use std::path::Path;

/// Grid dimensions from explicit `rows`/`cols`, derived from the field
/// geometry only for the missing ones.
pub fn resolve_dimensions(
    rows: Option<usize>,
    cols: Option<usize>,
    width: usize,
    height: usize,
    cell_size: usize,
) -> Result<(usize, usize), GridError> {
    let (rows, cols) = match (rows, cols) {
        (Some(rows), Some(cols)) => (rows, cols),
        _ => {
            let (derived_rows, derived_cols) = grid_dimensions(width, height, cell_size)
                .ok_or(GridError::InvalidDimension {
                    rows: rows.unwrap_or(0),
                    cols: cols.unwrap_or(0),
                })?;
            (rows.unwrap_or(derived_rows), cols.unwrap_or(derived_cols))
        }
    };
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimension { rows, cols });
    }
    Ok((rows, cols))
}

/// Starting grid of a session: the pattern at `pattern` if it loads,
/// otherwise a random `rows x cols` grid.
///
/// A pattern that fails to load is reported on stderr, not returned.
pub fn initial_grid(
    pattern: Option<&Path>,
    rows: usize,
    cols: usize,
    seed: Option<u64>,
) -> Result<Grid, GridError> {
    if let Some(path) = pattern {
        match Grid::load(path) {
            Ok(grid) => return Ok(grid),
            Err(err) => eprintln!("{}; falling back to a random {}x{} grid", err, rows, cols),
        }
    }
    Grid::random(rows, cols, seed)
}

#[cfg(test)]
mod tests {
    use super::{initial_grid, resolve_dimensions};
    use crate::{Config, Grid, GridError};
    use std::path::PathBuf;

    const SEED: u64 = 42;

    fn temp_pattern(name: &str, data: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "cell_grid_setup_{}_{}.txt",
            name,
            std::process::id()
        ));
        std::fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_dimensions_from_geometry() {
        let dims = resolve_dimensions(None, None, Config::WIDTH, Config::HEIGHT, Config::CELL_SIZE);
        assert_eq!(dims.unwrap(), (48, 64));
        assert_eq!(resolve_dimensions(Some(5), None, 320, 240, 20).unwrap(), (5, 16));
        assert_eq!(resolve_dimensions(None, Some(7), 320, 240, 20).unwrap(), (12, 7));
    }

    #[test]
    fn test_explicit_dimensions_ignore_cell_size() {
        assert_eq!(resolve_dimensions(Some(3), Some(4), 640, 480, 0).unwrap(), (3, 4));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            resolve_dimensions(Some(3), None, 640, 480, 0),
            Err(GridError::InvalidDimension { rows: 3, cols: 0 })
        ));
        assert!(matches!(
            resolve_dimensions(None, None, 5, 5, 10),
            Err(GridError::InvalidDimension { rows: 0, cols: 0 })
        ));
        assert!(matches!(
            resolve_dimensions(Some(0), Some(4), 640, 480, 10),
            Err(GridError::InvalidDimension { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn test_missing_pattern_falls_back_to_random() {
        let path = std::env::temp_dir().join("cell_grid_setup_no_such_pattern.txt");
        let grid = initial_grid(Some(&path), 6, 9, Some(SEED)).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (6, 9));
        assert_eq!(grid, Grid::random(6, 9, Some(SEED)).unwrap());
    }

    #[test]
    fn test_malformed_pattern_falls_back_to_random() {
        let path = temp_pattern("malformed", "101\n11\n");
        let grid = initial_grid(Some(&path), 4, 5, Some(SEED));
        std::fs::remove_file(&path).unwrap();
        assert_eq!(grid.unwrap(), Grid::random(4, 5, Some(SEED)).unwrap());
    }

    #[test]
    fn test_loadable_pattern_takes_priority() {
        let path = temp_pattern("block", "11\n11\n");
        let grid = initial_grid(Some(&path), 4, 5, Some(SEED));
        std::fs::remove_file(&path).unwrap();
        assert_eq!(grid.unwrap(), Grid::from_pattern("11\n11").unwrap());
    }

    #[test]
    fn test_without_pattern() {
        let grid = initial_grid(None, 3, 3, Some(SEED)).unwrap();
        assert_eq!(grid, Grid::random(3, 3, Some(SEED)).unwrap());
        assert!(initial_grid(None, 0, 3, Some(SEED)).is_err());
    }
}
