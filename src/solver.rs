//! The exhaustive backtracking solver.
//!
//! This is independent of the technique engine: it validates freshly loaded
//! puzzles and produces the answer grid that move validation compares
//! against. It is never offered as a hint and records no explanation.
//!
//! The algorithm is plain depth-first search over the lowest empty cell,
//! trying the digits not present among the cell's 20 peers and undoing on
//! failure. Worst case exponential, which is acceptable at 81-cell scale
//! with immediate peer pruning.

use crate::bitset::Set;
use crate::board::{Cell, Digit, Grid};
use crate::errors::InvalidPuzzle;

/// Searches for a solution of the grid's entered digits.
///
/// Returns the first completely filled grid found, or `None` if none exists.
/// Candidate state of the input is ignored; the returned grid has all cells
/// solved and therefore no candidates.
pub fn solve(grid: &Grid) -> Option<Grid> {
    let mut values = grid.to_bytes();
    if !solve_from(&mut values, 0) {
        return None;
    }

    let mut solved = *grid;
    for (cell, &digit) in Cell::all().zip(values.iter()) {
        if solved.value(cell).is_none() {
            solved.place(crate::board::Candidate {
                cell,
                digit: Digit::new(digit),
            });
        }
    }
    Some(solved)
}

/// Like [`solve`], but turns an unsolvable grid into an [`InvalidPuzzle`]
/// error for load-time validation.
pub fn validate(grid: &Grid) -> Result<Grid, InvalidPuzzle> {
    solve(grid).ok_or(InvalidPuzzle)
}

fn solve_from(values: &mut [u8; 81], lower_bound: usize) -> bool {
    // every cell below `lower_bound` is filled already, so the scan
    // finds the first empty cell of the whole grid
    let cell_idx = match (lower_bound..81).find(|&idx| values[idx] == 0) {
        Some(idx) => idx,
        None => return true,
    };

    let cell = Cell::new(cell_idx as u8);
    let mut used = Set::NONE;
    for peer in cell.peers() {
        if values[peer.as_index()] != 0 {
            used |= Digit::new(values[peer.as_index()]);
        }
    }

    for digit in Digit::all() {
        if used.contains(digit) {
            continue;
        }
        values[cell_idx] = digit.get();
        if solve_from(values, cell_idx + 1) {
            return true;
        }
    }
    values[cell_idx] = 0;
    false
}

#[cfg(test)]
mod test {
    use super::*;

    #[rustfmt::skip]
    const PUZZLE: [u8; 81] = [
        5, 3, 0, 0, 7, 0, 0, 0, 0,
        6, 0, 0, 1, 9, 5, 0, 0, 0,
        0, 9, 8, 0, 0, 0, 0, 6, 0,
        8, 0, 0, 0, 6, 0, 0, 0, 3,
        4, 0, 0, 8, 0, 3, 0, 0, 1,
        7, 0, 0, 0, 2, 0, 0, 0, 6,
        0, 6, 0, 0, 0, 0, 2, 8, 0,
        0, 0, 0, 4, 1, 9, 0, 0, 5,
        0, 0, 0, 0, 8, 0, 0, 7, 9,
    ];

    #[rustfmt::skip]
    const SOLUTION: [u8; 81] = [
        5, 3, 4, 6, 7, 8, 9, 1, 2,
        6, 7, 2, 1, 9, 5, 3, 4, 8,
        1, 9, 8, 3, 4, 2, 5, 6, 7,
        8, 5, 9, 7, 6, 1, 4, 2, 3,
        4, 2, 6, 8, 5, 3, 7, 9, 1,
        7, 1, 3, 9, 2, 4, 8, 5, 6,
        9, 6, 1, 5, 3, 7, 2, 8, 4,
        2, 8, 7, 4, 1, 9, 6, 3, 5,
        3, 4, 5, 2, 8, 6, 1, 7, 9,
    ];

    #[test]
    fn solves_unique_puzzle() {
        let grid = Grid::from_slice(&PUZZLE).unwrap();
        let solved = solve(&grid).unwrap();
        assert_eq!(solved.to_bytes()[..], SOLUTION[..]);
        assert!(solved.is_solved());
    }

    #[test]
    fn preserves_givens() {
        let grid = Grid::from_slice(&PUZZLE).unwrap();
        let solved = solve(&grid).unwrap();
        for cell in Cell::all() {
            assert_eq!(grid.is_given(cell), solved.is_given(cell));
        }
    }

    #[test]
    fn detects_unsolvable_puzzle() {
        // top row holds 1..=8, the remaining cell sees a 9 in its column
        let mut flat = [0; 81];
        for (idx, slot) in flat.iter_mut().enumerate().take(8) {
            *slot = idx as u8 + 1;
        }
        flat[17] = 9;
        let grid = Grid::from_slice(&flat).unwrap();
        assert_eq!(solve(&grid), None);
        assert_eq!(validate(&grid), Err(InvalidPuzzle));
    }

    #[test]
    fn fills_empty_grid() {
        let grid = Grid::from_slice(&[0; 81]).unwrap();
        let solved = solve(&grid).unwrap();
        assert!(solved.is_solved());
        assert!(Grid::from_slice(&solved.to_bytes()).is_ok());
    }
}
