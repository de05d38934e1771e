#![cfg(feature = "std")]

//! Terminal drawing: screen clearing, coloured pieces, drop animation and
//! the static menu/rules screens.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{style, Color, Stylize},
    terminal::{Clear, ClearType},
};

use crate::{
    common::{Marker, Position},
    config::{Dimensions, RUN_LENGTH},
    grid::GridState,
    player::{PieceColor, Player},
};

/// Delay between frames of the falling-piece animation.
pub const DROP_FRAME: Duration = Duration::from_millis(60);

const EMPTY_CELL: char = '.';
const PIECE: char = 'O';

pub const BANNER: &str = r"
   ____                            _     _  _
  / ___|___  _ __  _ __   ___  ___| |_  | || |
 | |   / _ \| '_ \| '_ \ / _ \/ __| __| | || |_
 | |__| (_) | | | | | | |  __/ (__| |_  |__   _|
  \____\___/|_| |_|_| |_|\___|\___|\__|    |_|
";

pub fn terminal_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Blue => Color::Blue,
        PieceColor::Green => Color::Green,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Magenta => Color::Magenta,
        PieceColor::Cyan => Color::Cyan,
    }
}

/// Clear the terminal and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

fn write_cell<W: Write>(out: &mut W, cell: Option<Marker>, players: &[Player; 2]) -> io::Result<()> {
    match cell {
        None => write!(out, "{:<3}", EMPTY_CELL),
        Some(marker) => {
            let color = terminal_color(players[marker.index()].color());
            write!(out, "{}  ", style(PIECE).with(color))
        }
    }
}

fn write_header<W: Write>(out: &mut W, columns: usize) -> io::Result<()> {
    for column in 1..=columns {
        write!(out, "{:<3}", column)?;
    }
    writeln!(out)
}

/// Draw the grid with a 1-indexed column header underneath.
pub fn write_grid<W: Write>(out: &mut W, grid: &GridState, players: &[Player; 2]) -> io::Result<()> {
    for row in 0..grid.rows() {
        for cell in grid.row(row) {
            write_cell(out, cell, players)?;
        }
        writeln!(out)?;
    }
    write_header(out, grid.columns())
}

/// Draw one animation frame: the piece that landed at `landed` is shown at
/// `falling_row` instead.
fn write_frame<W: Write>(
    out: &mut W,
    grid: &GridState,
    players: &[Player; 2],
    landed: Position,
    falling_row: usize,
) -> io::Result<()> {
    let piece = grid.cell(landed.row, landed.column);
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let cell = if column != landed.column {
                grid.cell(row, column)
            } else if row == falling_row {
                piece
            } else if row == landed.row {
                None
            } else {
                grid.cell(row, column)
            };
            write_cell(out, cell, players)?;
        }
        writeln!(out)?;
    }
    write_header(out, grid.columns())
}

/// Animate the piece at `landed` falling from the top row, clearing the screen
/// between frames.
pub fn animate_drop<W: Write>(
    out: &mut W,
    grid: &GridState,
    players: &[Player; 2],
    landed: Position,
    frame: Duration,
) -> io::Result<()> {
    for falling_row in 0..=landed.row {
        clear_screen(out)?;
        write_frame(out, grid, players, landed, falling_row)?;
        out.flush()?;
        thread::sleep(frame);
    }
    Ok(())
}

pub fn write_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "1. Play")?;
    writeln!(out, "2. Settings")?;
    writeln!(out, "3. Rules")?;
    writeln!(out, "4. Quit")
}

pub fn write_rules<W: Write>(out: &mut W, dimensions: Dimensions) -> io::Result<()> {
    let rule = "-".repeat(50);
    writeln!(out, "Game Rules")?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "1. The board has {} rows and {} columns.",
        dimensions.rows(),
        dimensions.columns()
    )?;
    writeln!(out, "2. Players take turns to drop their pieces in a column.")?;
    writeln!(
        out,
        "3. The first player to get {} of their pieces in a row (horizontally, vertically, or diagonally) wins.",
        RUN_LENGTH
    )?;
    writeln!(out, "4. If the board is full and there is no winner, the game is a tie.")?;
    writeln!(out, "{}", rule)
}

pub fn write_settings<W: Write>(out: &mut W, dimensions: Dimensions, animate: bool) -> io::Result<()> {
    let rule = "-".repeat(50);
    writeln!(out, "Settings")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "1. Rows: {}", dimensions.rows())?;
    writeln!(out, "2. Columns: {}", dimensions.columns())?;
    writeln!(out, "3. Drop animation: {}", if animate { "on" } else { "off" })?;
    writeln!(out, "{}", rule)
}

/// List the colours still available, each drawn in its own colour.
pub fn write_palette<W: Write>(out: &mut W, available: &[PieceColor]) -> io::Result<()> {
    for &color in available {
        writeln!(out, "{}", style(color.name()).with(terminal_color(color)))?;
    }
    Ok(())
}
