/// Compile-time defaults of the simulation.
pub struct Config;

impl Config {
    pub const WIDTH: usize = 640;
    pub const HEIGHT: usize = 480;
    pub const CELL_SIZE: usize = 10;
    /// Generations per second.
    pub const SPEED: f64 = 10.;

    pub const PAUSE_COMMAND: &'static str = "p";
    pub const STEP_COMMAND: &'static str = "s";
    pub const QUIT_COMMAND: &'static str = "q";
}

/// Grid dimensions `(rows, cols)` fitting a `width x height` area split into
/// square cells of side `cell_size`.
///
/// Returns `None` if `cell_size` is zero.
pub fn grid_dimensions(width: usize, height: usize, cell_size: usize) -> Option<(usize, usize)> {
    if cell_size == 0 {
        return None;
    }
    Some((height / cell_size, width / cell_size))
}
