use crate::bitset::Set;
use crate::board::{Candidate, Cell, CellState, Digit, House};
use crate::errors::{InvalidEntry, LineParseError, LoadError};
use crate::helper::CellArray;
use crate::strategy::Step;
use std::fmt;

/// The 81-cell constraint model all techniques work on.
///
/// A `Grid` tracks the entered digits, which of them were givens and the
/// remaining candidates of every unsolved cell. Candidates are authoritative
/// state, not a cache: eliminations made by applied steps or by the
/// forcing-chain engine persist until the cell is solved, they are never
/// resurrected by recomputation.
///
/// The type is `Copy` (fixed arrays of bitmasks), so the forcing-chain engine
/// clones it once per hypothesis branch and concurrent branches never share
/// mutable state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    pub(crate) values: CellArray<Option<Digit>>,
    pub(crate) givens: Set<Cell>,
    pub(crate) candidates: CellArray<Set<Digit>>,
}

impl Grid {
    /// Creates a grid from a flat, row-major sequence of 81 integers,
    /// `0` denoting a blank cell.
    ///
    /// Rejects slices of the wrong length, out-of-range digits and grids
    /// where two cells sharing a house hold the same digit. Candidates are
    /// generated for all empty cells.
    pub fn from_slice(flat: &[u8]) -> Result<Grid, LoadError> {
        if flat.len() != 81 {
            return Err(LoadError::WrongLength(flat.len()));
        }

        let mut values = CellArray([None; 81]);
        let mut givens = Set::NONE;
        for (cell, &digit) in Cell::all().zip(flat) {
            match digit {
                0 => {}
                1..=9 => {
                    values[cell] = Some(Digit::new(digit));
                    givens |= cell;
                }
                _ => return Err(LoadError::InvalidDigit { cell: cell.get(), digit }),
            }
        }

        // no two cells sharing a house may hold equal digits
        for house in House::all() {
            let mut seen = Set::NONE;
            for cell in house.cells() {
                if let Some(digit) = values[cell] {
                    if seen.contains(digit) {
                        return Err(LoadError::Conflict {
                            cell: cell.get(),
                            digit: digit.get(),
                        });
                    }
                    seen |= digit;
                }
            }
        }

        let mut grid = Grid {
            values,
            givens,
            candidates: CellArray([Set::NONE; 81]),
        };
        grid.generate_candidates();
        Ok(grid)
    }

    /// Creates a grid from the line format: 81 cells from left to right,
    /// top to bottom, with `.`, `_` or `0` for blanks.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut flat = [0; 81];
        let mut n_cells = 0;
        for ch in s.trim().chars() {
            let digit = match ch {
                '1'..='9' => ch as u8 - b'0',
                '.' | '_' | '0' => 0,
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells,
                        ch,
                    }));
                }
            };
            if n_cells == 81 {
                return Err(LineParseError::TooManyCells);
            }
            flat[n_cells as usize] = digit;
            n_cells += 1;
        }
        if n_cells < 81 {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        Ok(Grid::from_slice(&flat)?)
    }

    /// The digit entered in `cell`, if any.
    #[inline]
    pub fn value(&self, cell: Cell) -> Option<Digit> {
        self.values[cell]
    }

    /// Whether `cell` was filled in the original puzzle.
    #[inline]
    pub fn is_given(&self, cell: Cell) -> bool {
        self.givens.contains(cell)
    }

    /// The candidate set of `cell`. Empty for cells that hold a digit.
    #[inline]
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.candidates[cell]
    }

    /// The state of `cell`: its digit, or its candidates if unsolved.
    pub fn cell_state(&self, cell: Cell) -> CellState {
        match self.values[cell] {
            Some(digit) => CellState::Digit(digit),
            None => CellState::Candidates(self.candidates[cell]),
        }
    }

    /// Whether all 81 cells hold a digit.
    pub fn is_solved(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Iterator over all cells without a digit.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.values[cell].is_none())
    }

    /// The digits held by the cell's 20 peers.
    pub(crate) fn peer_digits(&self, cell: Cell) -> Set<Digit> {
        let mut digits = Set::NONE;
        for peer in cell.peers() {
            if let Some(digit) = self.values[peer] {
                digits |= digit;
            }
        }
        digits
    }

    /// Recomputes every cell's candidates from scratch: for empty cells all
    /// digits not held by a peer, for solved cells the empty set.
    ///
    /// This discards prior eliminations. It runs once at load time; afterwards
    /// candidate state is only narrowed via [`apply_step`](Grid::apply_step),
    /// [`place`](Grid::place) and the elimination methods.
    pub fn generate_candidates(&mut self) {
        for cell in Cell::all() {
            self.candidates[cell] = match self.values[cell] {
                Some(_) => Set::NONE,
                None => Set::ALL.without(self.peer_digits(cell)),
            };
        }
    }

    /// Removes `digit` from the candidate sets of the 20 peers of `cell`.
    ///
    /// Only the peers are touched; no other candidate state is recomputed, so
    /// previous eliminations survive. Repeating the call is a no-op.
    pub fn eliminate_from_peers(&mut self, cell: Cell, digit: Digit) {
        for peer in cell.peers() {
            self.candidates[peer].remove(digit.as_set());
        }
    }

    /// Removes a single candidate from its cell.
    pub fn remove_candidate(&mut self, candidate: Candidate) {
        self.candidates[candidate.cell].remove(candidate.digit_set());
    }

    /// Enters a digit: the cell's candidates become empty and the digit is
    /// eliminated from all peers.
    pub fn place(&mut self, candidate: Candidate) {
        debug_assert!(self.values[candidate.cell].is_none());
        self.values[candidate.cell] = Some(candidate.digit);
        self.candidates[candidate.cell] = Set::NONE;
        self.eliminate_from_peers(candidate.cell, candidate.digit);
    }

    /// Applies a [`Step`]: performs its eliminations, then its placement.
    ///
    /// Candidate sets only ever shrink under this operation.
    pub fn apply_step(&mut self, step: &Step) {
        for &elimination in &step.eliminations {
            self.remove_candidate(elimination);
        }
        if let Some(placement) = step.placement {
            self.place(placement);
        }
    }

    /// Returns the grid as a flat array of 81 digits, `0` for blanks.
    pub fn to_bytes(&self) -> [u8; 81] {
        let mut bytes = [0; 81];
        for (byte, value) in bytes.iter_mut().zip(self.values.iter()) {
            *byte = value.map_or(0, Digit::get);
        }
        bytes
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &byte in &self.to_bytes() {
            match byte {
                0 => f.write_str(".")?,
                _ => write!(f, "{}", byte)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn candidates_respect_peers() {
        let grid = Grid::from_str_line(
            "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
        )
        .unwrap();
        for cell in grid.empty_cells() {
            assert!(!grid.candidates(cell).overlaps(grid.peer_digits(cell)));
        }
        for cell in Cell::all().filter(|&c| grid.value(c).is_some()) {
            assert!(grid.candidates(cell).is_empty());
        }
    }

    #[test]
    fn eliminate_from_peers_is_idempotent() {
        let mut grid = Grid::from_slice(&[0; 81]).unwrap();
        grid.eliminate_from_peers(Cell::new(40), Digit::new(5));
        let once = grid;
        grid.eliminate_from_peers(Cell::new(40), Digit::new(5));
        assert_eq!(once, grid);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            Grid::from_slice(&[0; 80]),
            Err(LoadError::WrongLength(80))
        ));

        let mut flat = [0; 81];
        flat[13] = 12;
        assert!(matches!(
            Grid::from_slice(&flat),
            Err(LoadError::InvalidDigit { cell: 13, digit: 12 })
        ));

        // two 4s in the top row
        let mut flat = [0; 81];
        flat[0] = 4;
        flat[8] = 4;
        assert!(matches!(
            Grid::from_slice(&flat),
            Err(LoadError::Conflict { digit: 4, .. })
        ));
    }

    #[test]
    fn line_format_roundtrip() {
        let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let grid = Grid::from_str_line(line).unwrap();
        assert_eq!(line, grid.to_string());
        assert!(Grid::from_str_line(&line[..80]).is_err());
    }
}
