//! Local heuristic scoring of a single cell

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Cell, Side, DIRECTIONS},
    WIN_LENGTH,
};

/// Coefficients applied to each cell of a scoring window
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Added for a cell held by the scoring side
    pub own: f64,
    /// Added for a cell held by the opponent when not blocking
    pub opponent: f64,
    /// Added for a cell held by the opponent when blocking
    pub block: f64,
    /// Added for an empty cell (room to extend) when blocking
    pub open: f64,
}

impl Weights {
    pub const SIMPLE: Weights = Weights {
        own: 1.0,
        opponent: -1.0,
        block: 2.0,
        open: 0.0,
    };

    pub const EXTEND: Weights = Weights {
        own: 1.0,
        opponent: -1.0,
        block: 2.0,
        open: 0.5,
    };

    pub const STRONG_BLOCK: Weights = Weights {
        own: 1.0,
        opponent: -1.0,
        block: 10.0,
        open: 0.0,
    };

    pub fn is_finite(&self) -> bool {
        self.own.is_finite()
            && self.opponent.is_finite()
            && self.block.is_finite()
            && self.open.is_finite()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::SIMPLE
    }
}

/// Scores a hypothetical placement from the four line windows anchored at it
///
/// # Notes
/// Each window starts at the scored cell and walks `WIN_LENGTH` cells right,
/// down, down-right or down-left. Cells beyond the edge contribute nothing.
/// With `blocking` set, opponent marks in a window count as a reward instead
/// of a penalty, since occupying the cell denies them the line, and empty
/// cells earn the `open` bonus. Without it empty cells score nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct Evaluator {
    weights: Weights,
}

impl Evaluator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn evaluate(
        &self,
        board: &Board,
        row: usize,
        col: usize,
        side: Side,
        opponent: Side,
        blocking: bool,
    ) -> f64 {
        debug_assert_ne!(side, opponent);
        let mut score = 0.0;

        for &(d_row, d_col) in DIRECTIONS.iter() {
            for i in 0..WIN_LENGTH as isize {
                match board.cell_at(row as isize + i * d_row, col as isize + i * d_col) {
                    Some(Cell::Taken(owner)) if owner == side => score += self.weights.own,
                    Some(Cell::Taken(owner)) if owner == opponent => {
                        score += if blocking {
                            self.weights.block
                        } else {
                            self.weights.opponent
                        }
                    }
                    Some(Cell::Empty) if blocking => score += self.weights.open,
                    _ => {}
                }
            }
        }
        score
    }
}
