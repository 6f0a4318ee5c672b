//! Errors that may be encountered when loading a puzzle.
//!
//! Malformed input is rejected here, at load time. "Nothing found" states of
//! the technique detectors and of the forcing-chain engine are ordinary
//! `None`/empty returns, not errors.

use crate::board::positions::{block, col, row};

/// An invalid sudoku entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for first line, 9..=17 for 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell)
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell)
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell)
    }
}

/// Error for [`Grid::from_slice`](crate::Grid::from_slice)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LoadError {
    /// Flat puzzle should have length 81
    #[error("puzzle should have 81 cells, found {0}")]
    WrongLength(usize),
    /// Only digits 0..=9 are valid cell contents, 0 denoting a blank
    #[error("cell {cell} contains invalid digit {digit}")]
    InvalidDigit {
        /// Cell number from 0..=80
        cell: u8,
        /// The offending digit
        digit: u8,
    },
    /// Two cells sharing a row, column or block hold the same digit
    #[error("digit {digit} appears twice in a house, second time in cell {cell}")]
    Conflict {
        /// Cell number of the second occurrence
        cell: u8,
        /// The duplicated digit
        digit: u8,
    },
}

/// Error for [`Grid::from_str_line`](crate::Grid::from_str_line)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are numbers 1..=9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Returns number of cells supplied
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// Returned if >=82 valid cell positions are supplied
    #[error("line contains more than 81 cells")]
    TooManyCells,
    /// The parsed line is not a valid puzzle
    #[error(transparent)]
    Invalid(#[from] LoadError),
}

/// The loaded puzzle has no solution.
///
/// Returned by operations that require a solvable grid; the puzzle should be
/// rejected, not retried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("puzzle has no solution")]
pub struct InvalidPuzzle;
