use super::prelude::*;
use itertools::Itertools;

pub(crate) fn find_xy_wing(
    cell_poss_digits: &CellArray<Set<Digit>>,
    stop_after_first: bool,
    mut on_xy_wing: impl FnMut(
        (Cell, Set<Digit>),      // pivot
        [(Cell, Set<Digit>); 2], // pincers
        Digit,                   // the digit both pincers share
    ) -> bool,
) {
    for pivot in Cell::all() {
        let pivot_digits = cell_poss_digits[pivot];
        if pivot_digits.len() != 2 {
            continue;
        }

        // bivalue peers sharing exactly one candidate with the pivot
        let pincer_candidates: Vec<(Cell, Set<Digit>)> = pivot
            .peers()
            .into_iter()
            .map(|cell| (cell, cell_poss_digits[cell]))
            .filter(|&(_, digits)| {
                digits.len() == 2 && digits != pivot_digits && (digits & pivot_digits).len() == 1
            })
            .collect();

        for (&(cell1, digits1), &(cell2, digits2)) in pincer_candidates.iter().tuple_combinations() {
            let common = digits1 & digits2;
            if common.len() != 1 || (digits1 | digits2 | pivot_digits).len() != 3 {
                continue;
            }
            let shared_digit = common.one_possibility();
            // the shared digit inside the pivot would make this an xyz-wing
            if pivot_digits.contains(shared_digit) {
                continue;
            }

            // found xy-wing
            let found_conflicts = on_xy_wing(
                (pivot, pivot_digits),
                [(cell1, digits1), (cell2, digits2)],
                shared_digit,
            );
            if found_conflicts && stop_after_first {
                return;
            }
        }
    }
}
