use anyhow::{anyhow, Result};

use crate::board::{Board, Side};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won(Side),
    Draw,
}

/// A game in progress: the board, whose turn it is and the outcome so far
///
/// `Board::winner` cannot tell a drawn board from one still in play; `Game`
/// reports `Draw` once no line exists and no empty cell remains.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Side,
    num_moves: usize,
    state: GameState,
}

impl Game {
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Side::PlayerOne,
            num_moves: 0,
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for the move selector, which restores the board before returning
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Plays a move for the side to move after validating it
    pub fn play_checked(&mut self, row: usize, col: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is already over"));
        }
        let size = self.board.size();
        if row >= size || col >= size {
            return Err(anyhow!(
                "Invalid move, ({}, {}) out of range. Rows and columns must be between 0 and {}",
                row,
                col,
                size - 1
            ));
        }
        if !self.board.is_empty(row, col) {
            return Err(anyhow!("Invalid move, cell ({}, {}) is taken", row, col));
        }

        self.board.place(row, col, self.to_move);
        self.num_moves += 1;

        self.state = if let Some(side) = self.board.winner() {
            GameState::Won(side)
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            self.to_move = self.to_move.other();
            GameState::Playing
        };

        Ok(self.state)
    }

    /// Clears the board for a new game, with player one to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Side::PlayerOne;
        self.num_moves = 0;
        self.state = GameState::Playing;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::default(),
            to_move: Side::PlayerOne,
            num_moves: 0,
            state: GameState::Playing,
        }
    }
}
