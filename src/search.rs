//! Game tree search over a shared, mutated board

use crate::{
    board::{Board, Side},
    evaluator::Evaluator,
};

/// Width and height of the candidate window explored below each move
pub const CANDIDATE_SPAN: usize = 4;

/// A depth-limited searcher scoring positions for `maximizer`
///
/// # Candidate Moves
/// An alpha-beta ply does not scan the whole board. Its candidates are the
/// empty cells of the `CANDIDATE_SPAN` x `CANDIDATE_SPAN` window anchored at
/// the move that led to the node and extending down and to the right, visited
/// in row-major order. A ply whose window has no empty cell is scored as a
/// leaf. Plain minimax expands every legal cell of the board.
///
/// # Board Discipline
/// Both searches place a mark, recurse and clear the same cell before looking
/// at the next candidate, including when a cutoff ends the scan. The board a
/// search returns is always cell-for-cell the board it was given.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    evaluator: Evaluator,
    maximizer: Side,
    minimizer: Side,
    blocking: bool,

    /// The number of nodes visited by this `SearchEngine` so far (for diagnostics only)
    pub node_count: usize,
}

impl SearchEngine {
    pub fn new(evaluator: Evaluator, maximizer: Side, minimizer: Side, blocking: bool) -> Self {
        Self {
            evaluator,
            maximizer,
            minimizer,
            blocking,
            node_count: 0,
        }
    }

    /// Differential heuristic at the move that led to this node
    pub fn leaf_value(&self, board: &Board, last: (usize, usize)) -> f64 {
        let (row, col) = last;
        self.evaluator
            .evaluate(board, row, col, self.maximizer, self.minimizer, self.blocking)
            - self
                .evaluator
                .evaluate(board, row, col, self.minimizer, self.maximizer, self.blocking)
    }

    /// Minimax with alpha-beta pruning
    ///
    /// A cutoff only abandons the rest of the current window row; the scan
    /// resumes on the next row with the tightened bounds.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        last: (usize, usize),
        depth: usize,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.node_count += 1;

        if depth == 0 || board.wins_at(last.0, last.1) {
            return self.leaf_value(board, last);
        }

        let (side, mut best) = if maximizing {
            (self.maximizer, f64::NEG_INFINITY)
        } else {
            (self.minimizer, f64::INFINITY)
        };
        let mut expanded = false;

        for row in last.0..last.0 + CANDIDATE_SPAN {
            for col in last.1..last.1 + CANDIDATE_SPAN {
                if !board.is_empty(row, col) {
                    continue;
                }
                expanded = true;

                board.place(row, col, side);
                let value = self.alpha_beta(board, (row, col), depth - 1, !maximizing, alpha, beta);
                board.clear(row, col);

                if maximizing {
                    best = best.max(value);
                    alpha = alpha.max(value);
                } else {
                    best = best.min(value);
                    beta = beta.min(value);
                }
                if beta <= alpha {
                    break;
                }
            }
        }

        if !expanded {
            return self.leaf_value(board, last);
        }
        best
    }

    /// Plain minimax over every legal cell, without pruning
    ///
    /// Leaves, whether reached by depth, by a completed line or by a full
    /// board, are worth 0.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        last: (usize, usize),
        depth: usize,
        maximizing: bool,
    ) -> f64 {
        self.node_count += 1;

        if depth == 0 || board.wins_at(last.0, last.1) {
            return 0.0;
        }

        let legal_moves = board.legal_moves();
        if legal_moves.is_empty() {
            return 0.0;
        }

        let (side, mut best) = if maximizing {
            (self.maximizer, f64::NEG_INFINITY)
        } else {
            (self.minimizer, f64::INFINITY)
        };

        for &(row, col) in legal_moves.iter() {
            board.place(row, col, side);
            let value = self.minimax(board, (row, col), depth - 1, !maximizing);
            board.clear(row, col);

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }
}
