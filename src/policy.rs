//! Move selection for the computer opponent

use crate::{
    board::{Board, Side},
    config::{AiConfig, Strategy},
    evaluator::Evaluator,
    search::SearchEngine,
};

/// Why a move was chosen
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Reason {
    /// The move completes a line for the selecting side
    Win,
    /// The move occupies the cell that would complete a line for the opponent
    Block,
    /// The move had the best heuristic or search score
    Score(f64),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Choice {
    pub cell: (usize, usize),
    pub reason: Reason,
}

/// Chooses moves by escalating from immediate wins to blocks to scoring
///
/// # Tie-breaking
/// Every rule scans legal cells in row-major order and keeps the first cell
/// that satisfies it. Scored candidates only replace the current best on a
/// strict improvement, so equal scores resolve to the earliest cell.
#[derive(Clone, Debug)]
pub struct MoveSelector {
    config: AiConfig,
    evaluator: Evaluator,

    /// The number of search nodes visited by this `MoveSelector` so far (for diagnostics only)
    pub node_count: usize,
}

impl MoveSelector {
    pub fn new(config: AiConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config.weights),
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Picks a move for `side` without changing `board`
    ///
    /// Returns `None` only when the board has no empty cell.
    pub fn choose(&mut self, board: &mut Board, side: Side, opponent: Side) -> Option<Choice> {
        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            return None;
        }

        if let Some(cell) = Self::completing_cell(board, &legal_moves, side) {
            log::debug!("{:?} wins at {:?}", side, cell);
            return Some(Choice {
                cell,
                reason: Reason::Win,
            });
        }

        if let Some(cell) = Self::completing_cell(board, &legal_moves, opponent) {
            log::debug!("{:?} blocks {:?} at {:?}", side, opponent, cell);
            return Some(Choice {
                cell,
                reason: Reason::Block,
            });
        }

        let mut engine = SearchEngine::new(self.evaluator, side, opponent, self.config.blocking);
        let mut best: Option<((usize, usize), f64)> = None;

        for &(row, col) in legal_moves.iter() {
            let score = match self.config.strategy {
                Strategy::Heuristic => {
                    self.evaluator
                        .evaluate(board, row, col, side, opponent, self.config.blocking)
                }
                Strategy::AlphaBeta => {
                    board.place(row, col, side);
                    let score = engine.alpha_beta(
                        board,
                        (row, col),
                        self.config.depth.saturating_sub(1),
                        false,
                        f64::NEG_INFINITY,
                        f64::INFINITY,
                    );
                    board.clear(row, col);
                    score
                }
                Strategy::Minimax => {
                    board.place(row, col, side);
                    let score = engine.minimax(
                        board,
                        (row, col),
                        self.config.depth.saturating_sub(1),
                        false,
                    );
                    board.clear(row, col);
                    score
                }
            };
            log::trace!("candidate ({}, {}) scored {}", row, col, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some(((row, col), score));
            }
        }
        self.node_count += engine.node_count;

        best.map(|(cell, score)| {
            log::debug!(
                "{:?} plays {:?} by {} (score {}, {} nodes)",
                side,
                cell,
                self.config.strategy,
                score,
                engine.node_count
            );
            Choice {
                cell,
                reason: Reason::Score(score),
            }
        })
    }

    /// First legal cell at which `side` would complete a line
    fn completing_cell(
        board: &mut Board,
        legal_moves: &[(usize, usize)],
        side: Side,
    ) -> Option<(usize, usize)> {
        for &(row, col) in legal_moves.iter() {
            board.place(row, col, side);
            let completes = board.winner() == Some(side);
            board.clear(row, col);
            if completes {
                return Some((row, col));
            }
        }
        None
    }
}

/// Best move for `side` on `board`, or `None` when the board is full
///
/// The board is restored before returning; the caller applies the move.
pub fn select_move(
    board: &mut Board,
    side: Side,
    opponent: Side,
    config: &AiConfig,
) -> Option<(usize, usize)> {
    MoveSelector::new(*config)
        .choose(board, side, opponent)
        .map(|choice| choice.cell)
}
