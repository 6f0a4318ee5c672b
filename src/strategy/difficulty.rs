//! Grading puzzles by the techniques needed to crack them.

use crate::board::Grid;
use crate::errors::LoadError;
use crate::strategy::solver::find_next_logic_step;
use std::fmt;

/// Difficulty label of a puzzle, the step function of the hardest technique
/// the engine needed while solving it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub enum Grade {
    Easy,
    Medium,
    Hard,
    Expert,
    Diabolical,
    Ultimate,
}

impl Grade {
    fn from_score(score: u8) -> Grade {
        match score {
            0..=1 => Grade::Easy,
            2 => Grade::Medium,
            3..=4 => Grade::Hard,
            5..=6 => Grade::Expert,
            7..=8 => Grade::Diabolical,
            _ => Grade::Ultimate,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Grade::Easy => "easy",
            Grade::Medium => "medium",
            Grade::Hard => "hard",
            Grade::Expert => "expert",
            Grade::Diabolical => "diabolical",
            Grade::Ultimate => "ultimate",
        };
        f.write_str(label)
    }
}

const MAX_ITERATIONS: usize = 100;

/// Grades a flat 81-integer puzzle.
///
/// Repeatedly asks the orchestrator for the next step and applies it,
/// recording each technique's score, until the grid is solved, no technique
/// applies anymore or 100 iterations have passed. The forcing-chain engine
/// is never consulted; a remainder no technique can crack makes the puzzle
/// [`Grade::Ultimate`].
pub fn analyze_difficulty(flat_puzzle: &[u8]) -> Result<Grade, LoadError> {
    let mut grid = Grid::from_slice(flat_puzzle)?;
    let mut max_score = 0;

    for _ in 0..MAX_ITERATIONS {
        if grid.is_solved() {
            break;
        }
        let step = match find_next_logic_step(&grid, None) {
            Some(step) => step,
            None => break,
        };
        max_score = max_score.max(step.technique.score());
        grid.apply_step(&step);
    }

    match grid.is_solved() {
        true => Ok(Grade::from_score(max_score)),
        false => Ok(Grade::Ultimate),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ungradeable_remainder_is_ultimate() {
        // nothing is deducible on an empty grid
        assert_eq!(analyze_difficulty(&[0; 81]), Ok(Grade::Ultimate));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(analyze_difficulty(&[1; 81]).is_err());
        assert!(analyze_difficulty(&[]).is_err());
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_score(1), Grade::Easy);
        assert_eq!(Grade::from_score(2), Grade::Medium);
        assert_eq!(Grade::from_score(4), Grade::Hard);
        assert_eq!(Grade::from_score(6), Grade::Expert);
        assert_eq!(Grade::from_score(8), Grade::Diabolical);
        assert_eq!(Grade::from_score(10), Grade::Ultimate);
    }
}
