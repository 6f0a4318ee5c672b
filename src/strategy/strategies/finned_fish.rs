use super::prelude::*;
use itertools::Itertools;

// The fish rows (or columns) may carry up to two extra candidate cells,
// the fins. Eliminations then only hold where they are guarded by every fin.
pub(crate) fn find_finned_xwing(
    house_poss_positions: &HouseArray<DigitArray<Set<Position<House>>>>,
    focus_digit: Option<Digit>,
    stop_after_first: bool,
    mut on_fish: impl FnMut(
        Digit,
        [Line; 2],           // base lines
        Set<Position<Line>>, // the 2 shared positions
        Set<Cell>,           // fin cells
    ) -> bool,
) {
    for digit in Digit::all() {
        if focus_digit.map_or(false, |focus| focus != digit) {
            continue;
        }
        for &lines in &[Line::ALL_ROWS, Line::ALL_COLS] {
            for (line1, line2) in lines.into_iter().tuple_combinations() {
                let poss1 = house_poss_positions[line1][digit].as_line_set();
                let poss2 = house_poss_positions[line2][digit].as_line_set();
                if !(2..=3).contains(&poss1.len()) || !(2..=3).contains(&poss2.len()) {
                    continue;
                }

                let shared = poss1 & poss2;
                if shared.len() != 2 {
                    continue;
                }

                let mut fins = Set::NONE;
                for position in poss1.without(shared) {
                    fins |= line1.cell_at(position);
                }
                for position in poss2.without(shared) {
                    fins |= line2.cell_at(position);
                }
                // without fins this is a plain x-wing
                if fins.is_empty() || fins.len() > 2 {
                    continue;
                }

                if on_fish(digit, [line1, line2], shared, fins) && stop_after_first {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::{Candidate, Grid};
    use crate::strategy::test_support::restrict_digit_to;
    use crate::strategy::{find_all_technique_instances, Technique};

    #[test]
    fn fin_guards_the_eliminations() {
        // 6 in rows 3 and 8 shares columns 3 and 6, with one fin at r8c5;
        // of the column-6 leftovers only the cells in the fin's block fall
        let mut grid = Grid::from_slice(&[0; 81]).unwrap();
        restrict_digit_to(&mut grid, 6, &[20, 23, 65, 68, 67, 59, 77]);

        let steps = find_all_technique_instances(&grid, Technique::FinnedXWing);
        assert_eq!(steps.len(), 1);
        assert_eq!(
            steps[0].eliminations,
            vec![Candidate::new(59, 6), Candidate::new(77, 6)]
        );
    }
}
