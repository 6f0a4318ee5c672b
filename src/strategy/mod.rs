//! Human-style solving techniques.
//!
//! This module contains the technique engine that mimics human approaches
//! to sudoku solving for hinting at possible moves and grading difficulty.
//! Detectors receive a grid snapshot and report [`Step`]s without applying
//! them; [`find_next_logic_step`] tries all techniques in increasing order
//! of complexity and returns the first hit. When no direct technique
//! applies, the forcing-chain engine explores hypothetical branches under
//! an explicit depth bound.
//!
//! Human-style detection is much slower than the plain backtracking of
//! [`solver`](crate::solver); use the latter whenever only the solution
//! matters.

pub mod deduction;
mod difficulty;
mod forcing;
mod links;
mod solver;
mod strategies;

pub use self::deduction::{Link, LinkKind, Step};
pub use self::difficulty::{analyze_difficulty, Grade};
pub use self::forcing::{find_forcing_chain, find_hypothesis, DEFAULT_MAX_DEPTH};
pub use self::solver::{find_all_technique_instances, find_next_logic_step};
pub use self::strategies::Technique;
