use super::prelude::*;
use itertools::Itertools;

// Type 1 unique rectangles only: three corners restricted to the same two
// candidates. Were the fourth corner to fall back on those digits too, the
// rectangle's digits could be swapped freely and the puzzle would have two
// solutions. The technique presumes a uniquely solvable puzzle.
pub(crate) fn find_unique_rectangles(
    cell_poss_digits: &CellArray<Set<Digit>>,
    stop_after_first: bool,
    mut on_rectangle: impl FnMut(
        [Cell; 3],  // the bivalue floor corners
        Cell,       // the roof corner with extra candidates
        Set<Digit>, // the two rectangle digits
    ) -> bool,
) {
    for (row1, row2) in (0..9u8).tuple_combinations() {
        for (col1, col2) in (0..9u8).tuple_combinations() {
            let rows_in_same_band = row1 / 3 == row2 / 3;
            let cols_in_same_stack = col1 / 3 == col2 / 3;
            // the rectangle must span exactly 2 blocks
            if !(rows_in_same_band ^ cols_in_same_stack) {
                continue;
            }

            let corners = [
                Cell::new(row1 * 9 + col1),
                Cell::new(row1 * 9 + col2),
                Cell::new(row2 * 9 + col1),
                Cell::new(row2 * 9 + col2),
            ];
            // all four corners must be empty
            if corners
                .iter()
                .any(|&cell| cell_poss_digits[cell].is_empty())
            {
                continue;
            }

            for roof_idx in 0..4 {
                let floor = match roof_idx {
                    0 => [corners[1], corners[2], corners[3]],
                    1 => [corners[0], corners[2], corners[3]],
                    2 => [corners[0], corners[1], corners[3]],
                    _ => [corners[0], corners[1], corners[2]],
                };

                let pair = cell_poss_digits[floor[0]];
                if pair.len() != 2
                    || cell_poss_digits[floor[1]] != pair
                    || cell_poss_digits[floor[2]] != pair
                {
                    continue;
                }

                let roof = corners[roof_idx];
                let roof_digits = cell_poss_digits[roof];
                // the rectangle digits can't survive in the last corner
                let conflicts = roof_digits & pair;
                if roof_digits == pair || conflicts.is_empty() {
                    continue;
                }

                if on_rectangle(floor, roof, pair) && stop_after_first {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::Candidate;
    use crate::strategy::test_support::grid_with_candidates;
    use crate::strategy::{find_all_technique_instances, Technique};

    #[test]
    fn roof_corner_loses_the_rectangle_digits() {
        // r1c1, r1c5, r2c1 are {4,7}; r2c5 holds {4,7,9} and spans the
        // second block of the rectangle
        let grid = grid_with_candidates(&[
            (0, &[4, 7]),
            (4, &[4, 7]),
            (9, &[4, 7]),
            (13, &[4, 7, 9]),
        ]);
        let steps = find_all_technique_instances(&grid, Technique::UniqueRectangle);
        assert_eq!(steps.len(), 1);
        assert_eq!(
            steps[0].eliminations,
            vec![Candidate::new(13, 4), Candidate::new(13, 7)]
        );
    }

    #[test]
    fn single_block_rectangles_are_ignored() {
        // same pattern squeezed into one block proves nothing
        let grid = grid_with_candidates(&[
            (0, &[4, 7]),
            (1, &[4, 7]),
            (9, &[4, 7]),
            (10, &[4, 7, 9]),
        ]);
        let steps = find_all_technique_instances(&grid, Technique::UniqueRectangle);
        assert!(steps.is_empty());
    }
}
