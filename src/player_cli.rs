#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;

use crate::{
    common::{Rejection, TurnOutcome},
    config::BOARD_CELLS,
    game::Game,
    ui,
};

/// A single line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the 0-based cell index.
    Play(usize),
    Restart,
    NewGame,
    Quit,
    Unknown,
}

/// Parse a line of input. Cells are numbered 1-9 for humans.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "r" | "restart" => return Command::Restart,
        "n" | "new" => return Command::NewGame,
        "q" | "quit" | "exit" => return Command::Quit,
        _ => {}
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=BOARD_CELLS).contains(&n) => Command::Play(n - 1),
        _ => Command::Unknown,
    }
}

/// Interactive session reading commands from `input` and drawing to `output`.
pub struct CliSession<R, W> {
    game: Game,
    names: [String; 2],
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliSession<R, W> {
    /// Start a session for the two names.
    pub fn new(name_a: &str, name_b: &str, input: R, output: W) -> Self {
        let mut game = Game::new();
        game.start(name_a, name_b);
        Self {
            game,
            names: [String::from(name_a), String::from(name_b)],
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and apply commands until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.print_help()?;
        self.render()?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match parse_command(&line) {
                Command::Play(index) => {
                    let outcome = self.game.play_turn(index)?;
                    self.report(index, &outcome)?;
                }
                Command::Restart => {
                    self.game.restart()?;
                    self.render()?;
                }
                Command::NewGame => {
                    self.game.start(&self.names[0], &self.names[1]);
                    self.render()?;
                }
                Command::Quit => break,
                Command::Unknown => {
                    writeln!(self.output, "Invalid input")?;
                    self.print_help()?;
                }
            }
        }
        writeln!(self.output, "Final score: {}", ui::scoreboard(&self.game))?;
        Ok(())
    }

    fn report(&mut self, index: usize, outcome: &TurnOutcome) -> anyhow::Result<()> {
        match outcome {
            TurnOutcome::Rejected(Rejection::Occupied) => {
                writeln!(self.output, "Cell {} is already taken", index + 1)?;
                return Ok(());
            }
            TurnOutcome::Rejected(Rejection::GameOver) => {
                writeln!(
                    self.output,
                    "Round is over. Type 'r' to play again or 'n' for a new game."
                )?;
                return Ok(());
            }
            _ => {}
        }
        self.render()?;
        if let Some(highlighted) = ui::highlight_winning_line(self.game.board(), outcome) {
            writeln!(self.output, "Winning line:\n{}", highlighted)?;
        }
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}", ui::render_view(&self.game))?;
        Ok(())
    }

    fn print_help(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Enter a cell 1-9, 'r' to restart the round, 'n' for a new game, 'q' to quit."
        )?;
        Ok(())
    }
}
