use super::prelude::*;
use itertools::Itertools;
use std::collections::HashSet;

/// N cells of one house holding N+1 candidates between them.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Als {
    pub house: House,
    pub cells: Set<Cell>,
    pub digits: Set<Digit>,
}

/// Collects every ALS of 2 to 4 cells, deduplicated across houses.
pub(crate) fn collect_als(cell_poss_digits: &CellArray<Set<Digit>>) -> Vec<Als> {
    let mut sets = vec![];
    for house in House::all() {
        walk_combinations(
            cell_poss_digits,
            house,
            house.cells().into_iter(),
            Set::NONE,
            Set::NONE,
            &mut sets,
        );
    }
    // a miniline subset shows up through its line and its block
    let mut seen = HashSet::new();
    sets.retain(|als: &Als| seen.insert(als.cells.bits()));
    sets
}

fn walk_combinations(
    cell_poss_digits: &CellArray<Set<Digit>>,
    house: House,
    mut cells: SetIter<Cell>,
    cell_set: Set<Cell>,
    digits: Set<Digit>,
    sets: &mut Vec<Als>,
) {
    if cell_set.len() == 4 {
        return;
    }
    while let Some(cell) = cells.next() {
        let candidates = cell_poss_digits[cell];
        // solved cells and naked singles don't take part
        if candidates.len() < 2 {
            continue;
        }
        let new_cell_set = cell_set | cell.as_set();
        let new_digits = digits | candidates;
        // 4 cells can hold at most 5 candidates
        if new_digits.len() > 5 {
            continue;
        }

        if new_cell_set.len() >= 2 && new_digits.len() == new_cell_set.len() + 1 {
            sets.push(Als {
                house,
                cells: new_cell_set,
                digits: new_digits,
            });
        }

        walk_combinations(
            cell_poss_digits,
            house,
            cells.clone(),
            new_cell_set,
            new_digits,
            sets,
        );
    }
}

/// The cells of `cells` that still hold `digit` as a candidate.
pub(crate) fn cells_with_digit(
    cell_poss_digits: &CellArray<Set<Digit>>,
    cells: Set<Cell>,
    digit: Digit,
) -> Set<Cell> {
    let mut result = Set::NONE;
    for cell in cells {
        if cell_poss_digits[cell].contains(digit) {
            result |= cell;
        }
    }
    result
}

pub(crate) fn find_als_xz(
    cell_poss_digits: &CellArray<Set<Digit>>,
    stop_after_first: bool,
    mut on_als_xz: impl FnMut(
        &Als,  // first set
        &Als,  // second set
        Digit, // restricted common digit x
        Digit, // elimination digit z
    ) -> bool,
) {
    let sets = collect_als(cell_poss_digits);

    for (als1, als2) in sets.iter().tuple_combinations() {
        if als1.cells.overlaps(als2.cells) {
            continue;
        }
        let common_digits = als1.digits & als2.digits;
        if common_digits.len() < 2 {
            continue;
        }

        for x in common_digits {
            let x_cells1 = cells_with_digit(cell_poss_digits, als1.cells, x);
            let x_cells2 = cells_with_digit(cell_poss_digits, als2.cells, x);
            // restricted common: x can't be in both sets at once
            let restricted = x_cells1
                .into_iter()
                .all(|cell1| x_cells2.into_iter().all(|cell2| cell1.sees(cell2)));
            if !restricted {
                continue;
            }

            for z in common_digits.without(x.as_set()) {
                if on_als_xz(als1, als2, x, z) && stop_after_first {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Candidate, Grid};
    use crate::strategy::test_support::grid_with_candidates;
    use crate::strategy::{find_all_technique_instances, Technique};

    #[test]
    fn collects_exact_surplus_sets() {
        let grid = grid_with_candidates(&[(0, &[1, 2]), (1, &[2, 3])]);
        let sets = collect_als(&grid.candidates);
        assert!(sets
            .iter()
            .any(|als| als.cells == (Cell::new(0).as_set() | Cell::new(1))
                && als.digits.len() == 3));
        // no set may break the n+1 rule
        for als in &sets {
            assert_eq!(als.digits.len(), als.cells.len() + 1);
        }
    }

    #[test]
    fn restricted_common_forces_the_shared_digit() {
        // {r1c1,r1c2} hold {1,2,3}, {r2c1,r2c2} hold {1,3,4}; 1 is
        // restricted common, so 3 dies wherever it sees both 3-cells
        let grid = grid_with_candidates(&[
            (0, &[1, 2]),
            (1, &[2, 3]),
            (9, &[1, 4]),
            (10, &[3, 4]),
        ]);
        let steps = find_all_technique_instances(&grid, Technique::AlsXz);
        assert!(steps.iter().any(|step| {
            step.eliminations.contains(&Candidate::new(19, 3)) && step.als_sets.len() == 2
        }));
    }
}
