use super::prelude::*;
use crate::strategy::links;
use std::collections::VecDeque;

// Two-colors each digit's conjugate-pair graph by breadth first search.
// A node reached with the same color along paths of different parity sits
// on an odd strong-link cycle; the callback receives the two color groups
// of such a component.
pub(crate) fn find_x_cycles(
    house_poss_positions: &HouseArray<DigitArray<Set<Position<House>>>>,
    focus_digit: Option<Digit>,
    stop_after_first: bool,
    mut on_odd_cycle: impl FnMut(Digit, Set<Cell>, Set<Cell>) -> bool,
) {
    for digit in Digit::all() {
        if focus_digit.map_or(false, |focus| focus != digit) {
            continue;
        }

        let pairs = links::conjugate_pairs(house_poss_positions, digit);
        if pairs.is_empty() {
            continue;
        }
        let (adjacency, nodes) = links::strong_adjacency(&pairs);

        let mut visited: Set<Cell> = Set::NONE;
        for start in nodes {
            if visited.contains(start) {
                continue;
            }

            let mut color_a = start.as_set();
            let mut color_b = Set::NONE;
            let mut odd_cycle = false;
            let mut queue = VecDeque::new();
            queue.push_back(start);

            while let Some(cell) = queue.pop_front() {
                let cell_is_a = color_a.contains(cell);
                for linked in adjacency[cell] {
                    if (color_a | color_b).contains(linked) {
                        // two paths of different parity reach this node
                        if color_a.contains(linked) == cell_is_a {
                            odd_cycle = true;
                        }
                        continue;
                    }
                    match cell_is_a {
                        true => color_b |= linked,
                        false => color_a |= linked,
                    }
                    queue.push_back(linked);
                }
            }

            visited |= color_a | color_b;
            if !odd_cycle {
                continue;
            }
            if on_odd_cycle(digit, color_a, color_b) && stop_after_first {
                return;
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
    fn odd_loop_eliminates_cell_seeing_both_colors() {
        // conjugate pairs for 5: r1c2-r1c8 (row), r1c8-r5c8 (column),
        // r5c8-r6c9 (block), r6c9-r6c2 (row), r6c2-r1c2 (column) close an
        // odd loop of five strong links; r3c3 hangs off r1c2 in block 1.
        // r5c3 holds a 5 and sees both colors, the rest only one.
        let mut grid = Grid::from_slice(&[0; 81]).unwrap();
        restrict_digit_to(&mut grid, 5, &[1, 7, 43, 53, 46, 20, 38, 27, 40, 74]);

        let steps = find_all_technique_instances(&grid, Technique::XCycle);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].eliminations, vec![Candidate::new(38, 5)]);
        assert!(!steps[0].links.is_empty());
    }
}
