use super::prelude::*;

// Bivalue universal grave: if every unsolved cell were bivalue and every
// unsolved digit had exactly two places per house, the puzzle would have
// more than one solution. With a lone trivalue cell left, the candidate
// that appears three times in each of the cell's houses must be true.
pub(crate) fn find_bug_plus_one(
    cell_poss_digits: &CellArray<Set<Digit>>,
    house_poss_positions: &HouseArray<DigitArray<Set<Position<House>>>>,
    mut on_bug: impl FnMut(Candidate) -> bool,
) {
    let mut trivalue_cell = None;
    for cell in Cell::all() {
        match cell_poss_digits[cell].len() {
            0 | 2 => {}
            3 if trivalue_cell.is_none() => trivalue_cell = Some(cell),
            // a second trivalue cell, a naked single or a wider cell
            // all rule the pattern out
            _ => return,
        }
    }
    let cell = match trivalue_cell {
        Some(cell) => cell,
        None => return,
    };

    for digit in cell_poss_digits[cell] {
        let occurs_thrice_everywhere = cell
            .houses()
            .iter()
            .all(|&house| house_poss_positions[house][digit].len() == 3);
        if occurs_thrice_everywhere {
            on_bug(Candidate { cell, digit });
            return;
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::Candidate;
    use crate::strategy::test_support::grid_with_candidates;
    use crate::strategy::{find_all_technique_instances, Technique};

    fn bug_position() -> Vec<(u8, Vec<u8>)> {
        // r1c1 is the lone trivalue cell; 3 occurs exactly three times in
        // its row (r1c1, r1c4, r1c5), column (r1c1, r4c1, r5c1) and block
        // (r1c1, r2c2, r3c3); every other cell is bivalue
        (0..81)
            .map(|cell| match cell {
                0 => (cell, vec![1, 2, 3]),
                3 | 4 | 10 | 20 | 27 | 36 => (cell, vec![1, 3]),
                _ => (cell, vec![1, 2]),
            })
            .collect()
    }

    #[test]
    fn trivalue_cell_keeps_the_thrice_occurring_digit() {
        let narrowed = bug_position();
        let narrowed: Vec<(u8, &[u8])> = narrowed
            .iter()
            .map(|(cell, digits)| (*cell, digits.as_slice()))
            .collect();
        let grid = grid_with_candidates(&narrowed);

        let steps = find_all_technique_instances(&grid, Technique::Bug);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].placement, Some(Candidate::new(0, 3)));
    }

    #[test]
    fn two_trivalue_cells_are_no_bug() {
        let mut narrowed = bug_position();
        narrowed[40] = (40, vec![1, 2, 3]);
        let narrowed: Vec<(u8, &[u8])> = narrowed
            .iter()
            .map(|(cell, digits)| (*cell, digits.as_slice()))
            .collect();
        let grid = grid_with_candidates(&narrowed);

        assert!(find_all_technique_instances(&grid, Technique::Bug).is_empty());
    }
}
