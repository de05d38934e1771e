//! Commonly used types and utilities for ease of import.

pub use crate::{GridEngine, GridError, GridState, Marker, Outcome, Position, Round};

#[cfg(feature = "std")]
pub use crate::{ConsoleFrontend, Frontend, GameLoop, PieceColor, Player, Settings};
