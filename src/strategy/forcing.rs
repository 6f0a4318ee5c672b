//! Hypothetical branch search, used when no direct technique applies.
//!
//! Both entry points pick an unsolved cell, try each of its candidates in a
//! cloned grid and propagate the consequences. [`find_forcing_chain`] looks
//! for conclusions shared by *every* branch; [`find_hypothesis`] for a
//! single candidate surviving after all others ran into contradictions.
//!
//! Propagation is bounded by `max_depth` placements per branch. Running
//! into the bound yields no result rather than an error; "search deeper" is
//! a fresh invocation with a larger bound, not a resumed search.

use crate::board::{Candidate, Cell, Grid};
use crate::strategy::deduction::{Link, Step};
use crate::strategy::strategies::Technique;
use std::collections::VecDeque;

/// Default placement bound per branch. Callers wanting a deeper search
/// re-invoke with the bound raised in steps of 10; beyond roughly 100 the
/// propagation has cascaded through the whole grid anyway.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

enum Outcome {
    /// The branch settled without conflict.
    Stable,
    /// Some cell lost its last candidate or was forced to two digits.
    Contradiction(Cell),
    /// `max_depth` placements without resolution; no verdict.
    DepthExceeded,
}

struct Trace {
    seed: Candidate,
    placements: Vec<Candidate>,
    eliminations: Vec<Candidate>,
    outcome: Outcome,
}

/// Places the seed candidate and cascades naked singles over an explicit
/// worklist, recording every placement and candidate elimination.
fn propagate(grid: &mut Grid, seed: Candidate, max_depth: u32) -> Trace {
    let mut trace = Trace {
        seed,
        placements: vec![],
        eliminations: vec![],
        outcome: Outcome::Stable,
    };
    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(candidate) = queue.pop_front() {
        match grid.value(candidate.cell) {
            // entered by an earlier cascade of this very branch
            Some(digit) if digit == candidate.digit => continue,
            // two different forced digits for one cell
            Some(_) => {
                trace.outcome = Outcome::Contradiction(candidate.cell);
                return trace;
            }
            None => {}
        }
        if !grid.candidates(candidate.cell).contains(candidate.digit) {
            trace.outcome = Outcome::Contradiction(candidate.cell);
            return trace;
        }
        if trace.placements.len() as u32 >= max_depth {
            trace.outcome = Outcome::DepthExceeded;
            return trace;
        }

        for peer in candidate.cell.peers() {
            if grid.candidates(peer).contains(candidate.digit) {
                trace.eliminations.push(Candidate {
                    cell: peer,
                    digit: candidate.digit,
                });
            }
        }
        grid.place(candidate);
        trace.placements.push(candidate);

        for peer in candidate.cell.peers() {
            if grid.value(peer).is_some() {
                continue;
            }
            match grid.candidates(peer).unique() {
                // all candidates gone
                Err(_) => {
                    trace.outcome = Outcome::Contradiction(peer);
                    return trace;
                }
                Ok(Some(digit)) => queue.push_back(Candidate { cell: peer, digit }),
                Ok(None) => {}
            }
        }
    }
    trace
}

/// Searches for a cell forcing chain: a placement or elimination that every
/// candidate of some cell leads to.
///
/// Bivalue cells are tried before trivalue ones. Cells where a branch runs
/// into a contradiction or the depth bound are skipped; contradictions are
/// [`find_hypothesis`]'s domain. Returns `None` if nothing converges within
/// `max_depth`.
pub fn find_forcing_chain(grid: &Grid, max_depth: u32) -> Option<Step> {
    for branch_count in 2..=3 {
        for cell in grid.empty_cells() {
            let candidates = grid.candidates(cell);
            if candidates.len() != branch_count {
                continue;
            }

            let mut traces = Vec::with_capacity(branch_count as usize);
            for digit in candidates {
                let mut branch = *grid;
                let trace = propagate(&mut branch, Candidate { cell, digit }, max_depth);
                match trace.outcome {
                    Outcome::Stable => traces.push(trace),
                    Outcome::Contradiction(_) | Outcome::DepthExceeded => break,
                }
            }
            if traces.len() != branch_count as usize {
                continue;
            }

            // a conclusion counts when every single branch reaches it
            let (first, rest) = traces.split_first().unwrap();
            let convergent_placement = first
                .placements
                .iter()
                .skip(1) // the seed itself differs per branch
                .copied()
                .find(|&candidate| rest.iter().all(|t| t.placements.contains(&candidate)));
            if let Some(forced) = convergent_placement {
                let mut step = branch_step(Technique::ForcingChain, cell, &traces);
                step.digit = Some(forced.digit);
                step.target_cells.push(forced.cell);
                step.placement = Some(forced);
                step.explanation = format!(
                    "whichever of its {} candidates {} takes, {} ends up being {}",
                    candidates.len(),
                    cell,
                    forced.cell,
                    forced.digit,
                );
                return Some(step);
            }

            let convergent_elimination = first
                .eliminations
                .iter()
                .copied()
                .find(|&candidate| rest.iter().all(|t| t.eliminations.contains(&candidate)));
            if let Some(impossible) = convergent_elimination {
                let mut step = branch_step(Technique::ForcingChain, cell, &traces);
                step.digit = Some(impossible.digit);
                step.target_cells.push(impossible.cell);
                step.eliminations.push(impossible);
                step.explanation = format!(
                    "whichever of its {} candidates {} takes, {} loses the candidate {}",
                    candidates.len(),
                    cell,
                    impossible.cell,
                    impossible.digit,
                );
                return Some(step);
            }
        }
    }
    None
}

/// Disproves all but one candidate of a cell: if every other branch runs
/// into a contradiction, the surviving candidate is proven.
///
/// Cells where all branches contradict are internally inconsistent; they
/// are skipped silently, reporting unsolvability is the backtracking
/// solver's job. Returns `None` when nothing resolves within `max_depth`.
pub fn find_hypothesis(grid: &Grid, max_depth: u32) -> Option<Step> {
    for branch_count in 2..=3 {
        'cells: for cell in grid.empty_cells() {
            let candidates = grid.candidates(cell);
            if candidates.len() != branch_count {
                continue;
            }

            let mut survivor: Option<Trace> = None;
            let mut contradictions: Vec<(Trace, Cell)> = vec![];
            for digit in candidates {
                let mut branch = *grid;
                let trace = propagate(&mut branch, Candidate { cell, digit }, max_depth);
                match trace.outcome {
                    // no verdict for this cell within the depth bound
                    Outcome::DepthExceeded => continue 'cells,
                    Outcome::Contradiction(conflict) => contradictions.push((trace, conflict)),
                    Outcome::Stable => {
                        if survivor.is_some() {
                            // two viable candidates, nothing proven
                            continue 'cells;
                        }
                        survivor = Some(trace);
                    }
                }
            }

            let survivor = match survivor {
                Some(trace) => trace,
                // every branch contradicting means the position is broken
                // from this cell on; that is not this engine's verdict to give
                None => continue,
            };

            let mut step = branch_step(
                Technique::Hypothesis,
                cell,
                contradictions.iter().map(|(trace, _)| trace),
            );
            let proven = survivor.seed;
            step.digit = Some(proven.digit);
            step.target_cells.push(cell);
            step.placement = Some(proven);
            let disproven = contradictions
                .iter()
                .map(|&(ref trace, conflict)| format!("{} empties {}", trace.seed, conflict))
                .collect::<Vec<_>>()
                .join("; ");
            step.explanation = format!("{}; only {} remains possible", disproven, proven);
            return Some(step);
        }
    }
    None
}


// base cell plus the placement chain of every branch as strong links
fn branch_step<'a>(
    technique: Technique,
    cell: Cell,
    traces: impl IntoIterator<Item = &'a Trace>,
) -> Step {
    let mut step = Step::new(technique);
    step.base_cells.push(cell);
    for trace in traces {
        let mut previous = trace.seed;
        for &placement in trace.placements.iter().skip(1) {
            step.links.push(Link::strong(previous, placement));
            previous = placement;
        }
    }
    step
}
