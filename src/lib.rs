#![cfg_attr(not(feature = "std"), no_std)]

//! Terminal Connect Four.
//!
//! The grid engine, turn state machine and their supporting types build
//! without `std`; the console game, settings file and logging are gated
//! behind the default `std` feature.

mod bitboard;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod game_loop;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod menu;
#[cfg(feature = "std")]
mod player;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod settings;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use game_loop::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use menu::*;
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use settings::*;
