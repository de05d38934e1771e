#![cfg(feature = "std")]

use std::fmt;
use std::string::String;

use crate::common::Marker;

/// Piece colours offered during player setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
    Cyan,
}

impl PieceColor {
    pub const ALL: [PieceColor; 6] = [
        PieceColor::Red,
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Yellow,
        PieceColor::Magenta,
        PieceColor::Cyan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "Red",
            PieceColor::Blue => "Blue",
            PieceColor::Green => "Green",
            PieceColor::Yellow => "Yellow",
            PieceColor::Magenta => "Magenta",
            PieceColor::Cyan => "Cyan",
        }
    }

    /// Case-insensitive lookup by name, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A participant: what the screen calls them, which marker they own on the
/// grid, and how their pieces are drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    marker: Marker,
    color: PieceColor,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker, color: PieceColor) -> Self {
        Self {
            name: name.into(),
            marker,
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }
}
