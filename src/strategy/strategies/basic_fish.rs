use super::prelude::*;

pub(crate) fn find_fish(
    house_poss_positions: &HouseArray<DigitArray<Set<Position<House>>>>,
    goal_depth: u8,
    focus_digit: Option<Digit>,
    stop_after_first: bool,
    mut on_fish: impl FnMut(
        Digit,
        Set<Line>,           // lines of this orientation
        Set<Line>,           // base lines of the fish
        Set<Position<Line>>, // the 2-3 shared positions across them
    ) -> bool,
) {
    for digit in Digit::all() {
        if focus_digit.map_or(false, |focus| focus != digit) {
            continue;
        }
        for &lines in &[Line::ALL_ROWS, Line::ALL_COLS] {
            if walk_combinations(
                house_poss_positions,
                digit,
                goal_depth,
                Set::NONE,
                lines.into_iter(),
                lines,
                Set::NONE,
                stop_after_first,
                &mut on_fish,
            ) {
                return;
            }
        }
    }
}

//             goal_depth
// <degenerated>   1 (basically a hidden single, not supported by this fn)
// x-wing          2
// swordfish       3
fn walk_combinations(
    house_poss_positions: &HouseArray<DigitArray<Set<Position<House>>>>,
    digit: Digit,
    goal_depth: u8,
    line_set: Set<Line>,
    lines: SetIter<Line>,
    all_lines: Set<Line>,
    union_poss_positions: Set<Position<Line>>,
    stop_after_first: bool,
    on_fish: &mut impl FnMut(Digit, Set<Line>, Set<Line>, Set<Position<Line>>) -> bool,
) -> bool {
    if line_set.len() == goal_depth {
        // nothing of interest found
        if union_poss_positions.len() != goal_depth {
            return false;
        }
        // found xwing or swordfish
        if on_fish(digit, all_lines, line_set, union_poss_positions) && stop_after_first {
            return true;
        }
    }

    let mut lines = lines;
    while let Some(line) = lines.next() {
        let possible_positions = house_poss_positions[line][digit];
        let n_poss = possible_positions.len();
        let new_union_poss_positions = union_poss_positions | possible_positions.as_line_set();

        // n_poss == 0 => solved line (or impossible)
        // n_poss == 1 => hidden single
        if n_poss < 2 || new_union_poss_positions.len() > goal_depth {
            continue;
        }

        let new_line_set = line_set | line.as_set();
        if walk_combinations(
            house_poss_positions,
            digit,
            goal_depth,
            new_line_set,
            lines.clone(),
            all_lines,
            new_union_poss_positions,
            stop_after_first,
            on_fish,
        ) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod test {
    use crate::board::{Candidate, Grid};
    use crate::strategy::test_support::restrict_digit_to;
    use crate::strategy::{find_all_technique_instances, Technique};

    #[test]
    fn x_wing_clears_crossing_lines() {
        // 3 sits in rows 2 and 8 only in columns 4 and 7;
        // the extra 3s in those columns must go
        let mut grid = Grid::from_slice(&[0; 81]).unwrap();
        restrict_digit_to(&mut grid, 3, &[12, 15, 66, 69, 39, 51]);

        let steps = find_all_technique_instances(&grid, Technique::XWing);
        assert_eq!(steps.len(), 1);
        assert_eq!(
            steps[0].eliminations,
            vec![Candidate::new(39, 3), Candidate::new(51, 3)]
        );
    }
}
