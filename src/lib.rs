#![warn(clippy::all)]

mod cell;
pub mod driver;
mod error;
mod grid;
pub mod rule;
mod utils;

pub use cell::Cell;
pub use error::{GridError, PatternError};
pub use grid::{Cells, Grid};
pub use utils::{grid_dimensions, parse_pattern, Config, TickLimiter, ALIVE, DEAD};
