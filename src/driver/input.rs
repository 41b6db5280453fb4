use crate::Config;
use std::{
    io::{self, BufRead, BufReader},
    sync::mpsc::{channel, Receiver},
    thread,
};

/// User signal delivered to the control loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    /// Advance one generation while paused.
    Step,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            Config::PAUSE_COMMAND => Some(Self::TogglePause),
            Config::STEP_COMMAND => Some(Self::Step),
            Config::QUIT_COMMAND => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Reads commands from `input` line by line on a background thread.
///
/// End of input and read errors are reported as [`Command::Quit`].
pub fn spawn_reader<R: BufRead + Send + 'static>(input: R) -> Receiver<Command> {
    let (tx, rx) = channel();
    thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else { break };
            match Command::parse(&line) {
                Some(cmd) => {
                    if tx.send(cmd).is_err() {
                        return;
                    }
                }
                None => eprintln!("Unknown command {:?}", line.trim()),
            }
        }
        let _ = tx.send(Command::Quit);
    });
    rx
}

/// [`spawn_reader`] over stdin. `StdinLock` holds a mutex guard and cannot
/// cross threads, so stdin is wrapped in its own reader instead.
pub fn spawn_stdin_reader() -> Receiver<Command> {
    spawn_reader(BufReader::new(io::stdin()))
}
