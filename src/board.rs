use anyhow::{anyhow, Result};

use std::fmt;

use crate::{DEFAULT_SIZE, WIN_LENGTH};

/// Line directions scanned from an anchor cell: right, down, down-right, down-left
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// One of the two competing identities on the board
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    /// The character used for this side in textual boards
    pub fn symbol(self) -> char {
        match self {
            Side::PlayerOne => 'X',
            Side::PlayerTwo => 'O',
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Taken(Side),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// A placement of one mark by one side
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub side: Side,
}

impl Move {
    pub fn new(row: usize, col: usize, side: Side) -> Self {
        Self { row, col, side }
    }
}

/// A square grid of cells, stored row-major
///
/// # Notes
/// The board is mutated in place by search: every hypothetical `place` is
/// paired with a `clear` of the same cell before the enclosing call returns,
/// so no copy of the grid is made per node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Parses a board from one string per row
    ///
    /// `X` is player one, `O` is player two, `-` or `.` is an empty cell.
    /// Whitespace inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(anyhow!("a board needs at least one row"));
        }
        let mut board = Self::new(size);

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if symbols.len() != size {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    size
                ));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                match symbol.to_ascii_uppercase() {
                    'X' => board.place(row, col, Side::PlayerOne),
                    'O' => board.place(row, col, Side::PlayerTwo),
                    '-' | '.' => {}
                    _ => return Err(anyhow!("could not parse '{}' as a cell", symbol)),
                }
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at the given coordinates
    ///
    /// Panics if the coordinates are off the board.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) is off a {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        self.cells[row * self.size + col]
    }

    /// Returns the cell at signed coordinates, or `None` off the board
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row as usize >= self.size || col as usize >= self.size {
            return None;
        }
        Some(self.cells[row as usize * self.size + col as usize])
    }

    /// True iff the coordinates are on the board and the cell is empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col].is_empty()
    }

    /// Puts a mark for `side` on an empty cell
    pub fn place(&mut self, row: usize, col: usize, side: Side) {
        assert!(
            self.is_empty(row, col),
            "cannot place at ({}, {}): cell is occupied or off the board",
            row,
            col
        );
        self.cells[row * self.size + col] = Cell::Taken(side);
    }

    /// Applies a move produced by a selector or a player
    pub fn play(&mut self, mv: Move) {
        self.place(mv.row, mv.col, mv.side);
    }

    /// Empties a cell, undoing a hypothetical placement
    pub fn clear(&mut self, row: usize, col: usize) {
        assert!(
            row < self.size && col < self.size,
            "cannot clear ({}, {}): off the board",
            row,
            col
        );
        self.cells[row * self.size + col] = Cell::Empty;
    }

    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// All empty cells in row-major order
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Scans the whole board for a completed line
    ///
    /// Cells are visited in row-major order and each occupied cell checks the
    /// horizontal, vertical, diagonal and anti-diagonal line starting there.
    /// Returns `None` both while the game is in progress and on a full board
    /// with no line; use `legal_moves` to tell the two apart.
    pub fn winner(&self) -> Option<Side> {
        for row in 0..self.size {
            for col in 0..self.size {
                if let Cell::Taken(side) = self.cell(row, col) {
                    for &(d_row, d_col) in DIRECTIONS.iter() {
                        if self.line_from(row, col, d_row, d_col, side) {
                            return Some(side);
                        }
                    }
                }
            }
        }
        None
    }

    /// Checks whether the mark on (row, col) is part of a completed line
    pub fn wins_at(&self, row: usize, col: usize) -> bool {
        let side = match self.cell(row, col) {
            Cell::Taken(side) => side,
            Cell::Empty => return false,
        };

        for &(d_row, d_col) in DIRECTIONS.iter() {
            let mut run = 1;
            for &sign in [-1isize, 1].iter() {
                let mut r = row as isize + sign * d_row;
                let mut c = col as isize + sign * d_col;
                while self.cell_at(r, c) == Some(Cell::Taken(side)) {
                    run += 1;
                    r += sign * d_row;
                    c += sign * d_col;
                }
            }
            if run >= WIN_LENGTH {
                return true;
            }
        }
        false
    }

    fn line_from(&self, row: usize, col: usize, d_row: isize, d_col: isize, side: Side) -> bool {
        (1..WIN_LENGTH as isize).all(|i| {
            self.cell_at(row as isize + i * d_row, col as isize + i * d_col)
                == Some(Cell::Taken(side))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cell(row, col) {
                    Cell::Taken(side) => side.symbol(),
                    Cell::Empty => '-',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
