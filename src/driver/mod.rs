mod app;
mod input;
mod setup;

pub use app::App;
pub use input::{spawn_reader, spawn_stdin_reader, Command};
pub use setup::{initial_grid, resolve_dimensions};
