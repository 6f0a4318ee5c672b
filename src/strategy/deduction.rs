//! The [`Step`] type: a single explained deduction.
//!
//! Detectors return `Step`s without touching the grid; the caller applies
//! them through [`Grid::apply_step`](crate::Grid::apply_step). Everything a
//! front end needs to highlight the deduction is carried along: the pattern
//! cells, the affected cells, chain links and ALS cell groups.

use crate::board::{Candidate, Cell, Digit};
use crate::strategy::strategies::Technique;
use std::fmt;

/// Relation between two candidates in a chain.
///
/// A strong link means at least one of the two ends must be true,
/// a weak link means at most one of them can be.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub enum LinkKind {
    Strong,
    Weak,
}

/// A directed link between two candidates, for chain visualization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub struct Link {
    pub from: Candidate,
    pub to: Candidate,
    pub kind: LinkKind,
}

impl Link {
    pub(crate) fn strong(from: Candidate, to: Candidate) -> Link {
        Link {
            from,
            to,
            kind: LinkKind::Strong,
        }
    }

    #[allow(unused)]
    pub(crate) fn weak(from: Candidate, to: Candidate) -> Link {
        Link {
            from,
            to,
            kind: LinkKind::Weak,
        }
    }
}

/// One deduction: which technique matched, where, and what it changes.
///
/// Either `placement` is set (singles, BUG+1, forcing results) or
/// `eliminations` is non-empty. `base_cells` are the cells driving the
/// inference, `target_cells` the affected ones. `links` and `als_sets` are
/// visualization data for chain and ALS based techniques.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub struct Step {
    pub technique: Technique,
    pub digit: Option<Digit>,
    pub base_cells: Vec<Cell>,
    pub target_cells: Vec<Cell>,
    pub eliminations: Vec<Candidate>,
    pub placement: Option<Candidate>,
    pub links: Vec<Link>,
    pub als_sets: Vec<Vec<Cell>>,
    pub explanation: String,
}

impl Step {
    pub(crate) fn new(technique: Technique) -> Step {
        Step {
            technique,
            digit: None,
            base_cells: vec![],
            target_cells: vec![],
            eliminations: vec![],
            placement: None,
            links: vec![],
            als_sets: vec![],
            explanation: String::new(),
        }
    }

    /// Canonical identity of a step for deduplication: the placement,
    /// or the sorted set of eliminations.
    pub(crate) fn key(&self) -> StepKey {
        let mut eliminations: Vec<(u8, u8)> = self
            .eliminations
            .iter()
            .map(|c| (c.cell.get(), c.digit.get()))
            .collect();
        eliminations.sort_unstable();
        eliminations.dedup();
        StepKey {
            placement: self.placement.map(|c| (c.cell.get(), c.digit.get())),
            eliminations,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StepKey {
    placement: Option<(u8, u8)>,
    eliminations: Vec<(u8, u8)>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.technique, self.explanation)
    }
}

/// Comma-joins anything displayable, e.g. cells for an explanation.
pub(crate) fn join_iter<T: IntoIterator>(iter: T) -> String
where
    T::Item: fmt::Display,
{
    iter.into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
