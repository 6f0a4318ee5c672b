//! Strong-link extraction between same-digit candidates.
//!
//! A strong link joins two candidates of which at least one must be true,
//! a weak link two candidates of which at most one can be. For a single
//! digit, the strong links are the conjugate pairs: houses with exactly two
//! remaining candidate cells. Weak links of a digit are simply peer
//! relations between its candidate cells and are queried directly via
//! [`Cell::peers`] where needed.

use crate::bitset::Set;
use crate::board::{Candidate, Cell, Digit, House, Position};
use crate::helper::{CellArray, DigitArray, HouseArray};
use crate::strategy::deduction::Link;

/// All conjugate pairs of `digit`: for each house with exactly two candidate
/// cells for the digit, the two cells and the house linking them.
pub(crate) fn conjugate_pairs(
    house_poss_positions: &HouseArray<DigitArray<Set<Position<House>>>>,
    digit: Digit,
) -> Vec<(Cell, Cell, House)> {
    let mut pairs = vec![];
    for house in House::all() {
        let positions = house_poss_positions[house][digit];
        if positions.len() == 2 {
            let mut position_iter = positions.into_iter();
            let first = house.cell_at(position_iter.next().unwrap());
            let second = house.cell_at(position_iter.next().unwrap());
            pairs.push((first, second, house));
        }
    }
    pairs
}

/// Adjacency sets of the strong-link graph plus the set of linked cells.
pub(crate) fn strong_adjacency(pairs: &[(Cell, Cell, House)]) -> (CellArray<Set<Cell>>, Set<Cell>) {
    let mut adjacency = CellArray([Set::NONE; 81]);
    let mut nodes = Set::NONE;
    for &(first, second, _) in pairs {
        adjacency[first] |= second;
        adjacency[second] |= first;
        nodes |= first.as_set() | second;
    }
    (adjacency, nodes)
}

/// The strong links running inside `component`, as visualization records.
pub(crate) fn component_links(
    pairs: &[(Cell, Cell, House)],
    component: Set<Cell>,
    digit: Digit,
) -> Vec<Link> {
    pairs
        .iter()
        .filter(|&&(first, second, _)| component.contains(first) && component.contains(second))
        .map(|&(first, second, _)| {
            Link::strong(
                Candidate {
                    cell: first,
                    digit,
                },
                Candidate {
                    cell: second,
                    digit,
                },
            )
        })
        .collect()
}
