mod config;
mod parse_pattern;
mod tick_limit;

pub use config::{grid_dimensions, Config};
pub use parse_pattern::{parse_pattern, ALIVE, DEAD};
pub use tick_limit::TickLimiter;
