//! A computer opponent for four-in-a-row on a square grid
//!
//! Marks may be placed on any empty cell. A side wins by owning four
//! consecutive cells horizontally, vertically or along either diagonal.
//! The agent combines immediate win/block checks with a local heuristic
//! and an optional minimax or alpha-beta search.
//!
//! # Basic Usage
//!
//! ```
//! use fourline_ai::{board::{Board, Side}, config::AiConfig, policy::select_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new(11);
//! board.place(0, 0, Side::PlayerOne);
//! board.place(0, 1, Side::PlayerOne);
//! board.place(0, 2, Side::PlayerOne);
//!
//! let best_move = select_move(&mut board, Side::PlayerTwo, Side::PlayerOne, &AiConfig::default());
//!
//! assert_eq!(best_move, Some((0, 3)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluator;

pub mod search;

pub mod policy;

pub mod game;

pub mod config;

pub mod error;


/// The default width and height of the game board in cells
pub const DEFAULT_SIZE: usize = 11;

/// The number of consecutive marks needed to win
pub const WIN_LENGTH: usize = 4;

// the default board must be able to hold a winning line
const_assert!(DEFAULT_SIZE >= WIN_LENGTH);
