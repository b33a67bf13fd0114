use std::fmt;

use super::player::Player;
use crate::error::{BoardError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
/// Smallest side length on which four in a row is possible.
pub const MIN_SIDE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Fixed-size grid of cells. Row 0 is the top, row `rows - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the board; use [`Board::cell_at`]
    /// for a checked lookup.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "({row}, {col}) off board");
        self.cells[self.idx(row, col)]
    }

    /// Checked cell lookup
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.cells[self.idx(row, col)])
    }

    /// Lookup with signed coordinates; anything off the board is `None`.
    pub(crate) fn probe(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cell_at(row, col).ok()
    }

    fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col >= self.cols {
            return Err(MoveError::OutOfRange {
                col,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || !self.get(0, col).is_empty()
    }

    /// Row a disc dropped into `col` would settle in, without placing it
    pub fn landing_row(&self, col: usize) -> Result<usize, MoveError> {
        self.check_column(col)?;
        (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Drop a disc in a column, returns the row where it landed
    pub fn drop_disc(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        let row = self.landing_row(col)?;
        let idx = self.idx(row, col);
        self.cells[idx] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Reset every cell to empty, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = self.get(row, col).player().map_or('.', Player::symbol);
                write!(f, "{symbol:>3}")?;
            }
            writeln!(f)?;
        }
        for col in 0..self.cols {
            write!(f, "{:>3}", col + 1)?;
        }
        Ok(())
    }
}
