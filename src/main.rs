#![warn(clippy::all)]

use anyhow::{Context, Result};
use cell_grid::{driver, Config, Grid};
use clap::Parser;
use std::{io, path::PathBuf};

/// Conway's Game of Life on a bounded grid, rendered as text.
///
/// While running, type `p` + Enter to pause or resume, `s` to advance one
/// generation while paused and `q` to quit.
#[derive(Parser)]
#[command(name = "cell_grid")]
struct Args {
    /// Field width; together with `--cell-size` determines the number of columns.
    #[arg(long, default_value_t = Config::WIDTH)]
    width: usize,

    /// Field height; together with `--cell-size` determines the number of rows.
    #[arg(long, default_value_t = Config::HEIGHT)]
    height: usize,

    #[arg(long, default_value_t = Config::CELL_SIZE)]
    cell_size: usize,

    /// Number of rows (overrides the width/height derivation).
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns (overrides the width/height derivation).
    #[arg(long)]
    cols: Option<usize>,

    /// Generations per second.
    #[arg(long, default_value_t = Config::SPEED)]
    speed: f64,

    /// Seed for the random initial state.
    #[arg(long)]
    seed: Option<u64>,

    /// File with rows of `0`/`1` to start from instead of a random state.
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Compute this many generations without pacing, print the result and exit.
    #[arg(long)]
    generations: Option<u64>,

    #[arg(long)]
    paused: bool,

    /// Print statistics every tick.
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn initial_grid(&self) -> Result<Grid> {
        let (rows, cols) = driver::resolve_dimensions(
            self.rows,
            self.cols,
            self.width,
            self.height,
            self.cell_size,
        )?;
        driver::initial_grid(self.pattern.as_deref(), rows, cols, self.seed)
            .context("failed to create the grid")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut grid = args.initial_grid()?;
    eprintln!("Starting: {}", grid.statistics());

    if let Some(n) = args.generations {
        grid.step_n(n);
        print!("{}", grid);
        eprintln!("{}", grid.statistics());
        return Ok(());
    }

    let mut app = driver::App::new(grid, args.speed, driver::spawn_stdin_reader(), io::stdout())
        .with_paused(args.paused)
        .with_verbose(args.verbose);
    app.run().context("failed to write to stdout")
}
