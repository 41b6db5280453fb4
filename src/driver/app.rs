use super::Command;
use crate::{Grid, TickLimiter};
use std::{
    io::{self, Write},
    sync::mpsc::{Receiver, TryRecvError},
};

/// Terminal control loop: renders the grid every tick and advances it unless paused.
pub struct App<W: Write> {
    grid: Grid,                  // The simulated field.
    is_paused: bool,             // Flag indicating whether the simulation is paused.
    do_one_step: bool,           // Do one step and stay paused.
    quit: bool,                  // Set once a quit request is received.
    commands: Receiver<Command>, // User signals from the input thread.
    tick_limiter: TickLimiter,   // Limits the update rate to a certain value.
    out: W,                      // Sink for the rendered generations.
    verbose: bool,
}

impl<W: Write> App<W> {
    pub fn new(grid: Grid, speed: f64, commands: Receiver<Command>, out: W) -> Self {
        Self {
            grid,
            is_paused: false,
            do_one_step: false,
            quit: false,
            commands,
            tick_limiter: TickLimiter::new(speed),
            out,
            verbose: false,
        }
    }

    pub fn with_paused(mut self, is_paused: bool) -> Self {
        self.is_paused = is_paused;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn into_inner(self) -> (Grid, W) {
        (self.grid, self.out)
    }

    fn handle_commands(&mut self) {
        loop {
            match self.commands.try_recv() {
                Ok(Command::TogglePause) => {
                    self.is_paused = !self.is_paused;
                    let state = if self.is_paused { "Paused" } else { "Resumed" };
                    eprintln!("{}: {}", state, self.grid.statistics());
                }
                Ok(Command::Step) => self.do_one_step = true,
                Ok(Command::Quit) | Err(TryRecvError::Disconnected) => {
                    self.quit = true;
                    return;
                }
                Err(TryRecvError::Empty) => return,
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.grid)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn update_grid(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        self.grid.step();
        self.do_one_step = false;
    }

    /// Runs one tick without pacing.
    ///
    /// Returns `false` once the loop should stop.
    pub fn tick(&mut self) -> io::Result<bool> {
        self.handle_commands();
        if self.quit {
            return Ok(false);
        }
        self.draw()?;
        if self.verbose {
            eprintln!(
                "{}, {:.1} ticks/s",
                self.grid.statistics(),
                self.tick_limiter.ticks_per_second()
            );
        }
        self.update_grid();
        Ok(true)
    }

    /// Ticks at the configured rate until a quit request arrives.
    pub fn run(&mut self) -> io::Result<()> {
        while self.tick()? {
            self.tick_limiter.delay();
        }
        eprintln!("Stopped: {}", self.grid.statistics());
        Ok(())
    }
}
