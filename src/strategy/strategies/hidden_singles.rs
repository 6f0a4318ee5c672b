use super::prelude::*;

pub(crate) fn find_hidden_singles(
    cell_poss_digits: &CellArray<Set<Digit>>,
    focus_digit: Option<Digit>,
    stop_after_first: bool,
    mut on_single: impl FnMut(Candidate, House) -> bool,
) {
    for house in House::all() {
        let mut unsolved: Set<Digit> = Set::NONE;
        let mut multiple_unsolved = Set::NONE;

        for cell in house.cells() {
            let poss_digits = cell_poss_digits[cell];
            multiple_unsolved |= unsolved & poss_digits;
            unsolved |= poss_digits;
        }

        let mut singles = unsolved.without(multiple_unsolved);
        if let Some(focus) = focus_digit {
            singles &= focus;
        }
        if singles.is_empty() {
            continue;
        }

        for cell in house.cells() {
            let mask = cell_poss_digits[cell];
            // a lone candidate is a naked single, not a hidden one
            if mask.len() < 2 {
                continue;
            }

            if let Ok(Some(digit)) = (mask & singles).unique() {
                if on_single(Candidate { cell, digit }, house) && stop_after_first {
                    return;
                }

                // mark digit as found
                singles.remove(digit.as_set());
                if singles.is_empty() {
                    break; // continue with next house
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::Candidate;
    use crate::strategy::test_support::{grid_with_candidates, restrict_digit_to};
    use crate::strategy::{find_all_technique_instances, Technique};

    #[test]
    fn requires_unique_position_in_house() {
        // r1c1 is {2,5,7}, but 2 is a candidate elsewhere in the row:
        // no hidden single may be reported for it
        let grid = grid_with_candidates(&[(0, &[2, 5, 7])]);
        let steps = find_all_technique_instances(&grid, Technique::HiddenSingle);
        assert!(!steps
            .iter()
            .any(|step| step.placement == Some(Candidate::new(0, 2))));

        // once 2 is impossible everywhere else in the row, it is one
        let mut grid = grid;
        restrict_digit_to(&mut grid, 2, &[0, 9, 10, 11, 18, 19, 20, 27, 36, 45, 54, 63, 72]);
        let steps = find_all_technique_instances(&grid, Technique::HiddenSingle);
        assert!(steps
            .iter()
            .any(|step| step.placement == Some(Candidate::new(0, 2))));
    }
}
