#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdout, Write};
use std::time::Duration;

use anyhow::bail;

use crate::{
    common::{GridError, Position},
    game_loop::{Frontend, RoundEnd},
    grid::GridState,
    player::Player,
    ui,
};

/// Parse a 1-indexed column typed by a human into a 0-indexed column.
pub fn parse_column(input: &str, columns: usize) -> Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(format!("Please enter a column between 1 and {}", columns));
    }
    let column: usize = input
        .parse()
        .map_err(|_| format!("'{}' is not a number - enter a column between 1 and {}", input, columns))?;
    if column == 0 || column > columns {
        return Err(format!(
            "Column {} out of range - choose a column between 1 and {}",
            column, columns
        ));
    }
    Ok(column - 1)
}

/// Parse a yes/no answer. Only an explicit `y`/`yes` counts as yes.
pub fn parse_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Line-oriented terminal frontend. Reads answers from `input` and draws to
/// `output`; generic so tests can script a whole game.
pub struct ConsoleFrontend<R: BufRead, W: Write> {
    input: R,
    output: W,
    clear: bool,
    drop_frame: Option<Duration>,
}

impl ConsoleFrontend<io::StdinLock<'static>, Stdout> {
    /// Frontend on the process terminal.
    pub fn stdio(animate_drops: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout())
            .clear_screen(true)
            .animate_drops(animate_drops.then_some(ui::DROP_FRAME))
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    /// Plain frontend: no screen clearing, no animation.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear: false,
            drop_frame: None,
        }
    }

    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn animate_drops(mut self, frame: Option<Duration>) -> Self {
        self.drop_frame = frame;
        self
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Clear the screen if this frontend owns a real terminal.
    pub fn refresh(&mut self) -> io::Result<()> {
        if self.clear {
            ui::clear_screen(&mut self.output)?;
        }
        Ok(())
    }

    /// Print `message` and read one trimmed line. Fails once input is closed.
    pub fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Wait for Enter.
    pub fn pause(&mut self, message: &str) -> anyhow::Result<()> {
        self.prompt(message).map(|_| ())
    }

    pub fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            log::warn!("failed to write to terminal: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn show_grid(&mut self, grid: &GridState, players: &[Player; 2]) {
        let drawn = self
            .refresh()
            .and_then(|()| ui::write_grid(&mut self.output, grid, players));
        if let Err(e) = drawn {
            log::warn!("failed to draw grid: {}", e);
        }
    }

    fn show_drop(&mut self, grid: &GridState, players: &[Player; 2], landed: Position) {
        let Some(frame) = self.drop_frame else {
            return;
        };
        if let Err(e) = ui::animate_drop(&mut self.output, grid, players, landed, frame) {
            log::warn!("drop animation failed: {}", e);
        }
    }

    fn choose_column(&mut self, player: &Player, columns: usize) -> anyhow::Result<usize> {
        loop {
            let line = self.prompt(&format!(
                "{}, enter a column (1-{}): ",
                player.name(),
                columns
            ))?;
            match parse_column(&line, columns) {
                Ok(column) => return Ok(column),
                Err(e) => {
                    self.say(&format!("✗ {}", e));
                }
            }
        }
    }

    fn report_error(&mut self, error: &GridError) -> anyhow::Result<()> {
        let message = match error {
            GridError::InvalidColumn { .. } => format!("✗ Out of range: {}", error),
            GridError::ColumnFull { .. } => format!("✗ Column full: {}", error),
        };
        self.say(&message);
        // the next grid redraw clears the screen
        if self.clear {
            self.pause("Press Enter to continue...")?;
        }
        Ok(())
    }

    fn announce(&mut self, _grid: &GridState, _players: &[Player; 2], end: RoundEnd<'_>) {
        match end {
            RoundEnd::Win(player) => self.say(&format!("{} wins!", player.name())),
            RoundEnd::Draw => self.say("The board is full. It's a tie!"),
        }
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        let answer = self.prompt("Would you like to play again? (y/N): ")?;
        Ok(parse_yes(&answer))
    }
}
