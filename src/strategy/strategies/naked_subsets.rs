use super::prelude::*;

pub(crate) fn find_naked_subsets(
    cell_poss_digits: &CellArray<Set<Digit>>,
    house_solved_digits: &HouseArray<Set<Digit>>,
    subset_size: u8,
    stop_after_first: bool,
    mut on_subset: impl FnMut(House, Set<Position<House>>, Set<Digit>) -> bool,
) {
    fn walk_combinations(
        cell_poss_digits: &CellArray<Set<Digit>>,
        total_poss_digits: Set<Digit>,
        positions: SetIter<Position<House>>,
        house: House,
        position_set: Set<Position<House>>,
        subset_size: u8,
        stop_after_first: bool,
        on_subset: &mut impl FnMut(House, Set<Position<House>>, Set<Digit>) -> bool,
    ) -> bool {
        if position_set.len() > subset_size {
            return false;
        }
        if position_set.len() == subset_size
            && total_poss_digits.len() == position_set.len()
            && on_subset(house, position_set, total_poss_digits)
            && stop_after_first
        {
            // found a subset
            return true;
        }

        let mut positions = positions;
        while let Some(position) = positions.next() {
            let cell = house.cell_at(position);
            let poss_digits = cell_poss_digits[cell];
            // solved or impossible cell
            if poss_digits.is_empty() {
                continue;
            }
            let new_position_set = position_set | position.as_set();
            let new_total_poss_digits = total_poss_digits | poss_digits;

            // if true, then a subset was found and stop_after_first is set
            // stop recursion
            if walk_combinations(
                cell_poss_digits,
                new_total_poss_digits,
                positions.clone(),
                house,
                new_position_set,
                subset_size,
                stop_after_first,
                on_subset,
            ) {
                return true;
            }
        }
        false
    }

    for house in House::all() {
        if house_solved_digits[house].is_full() {
            continue;
        }
        if walk_combinations(
            cell_poss_digits,
            Set::NONE,
            Set::ALL.into_iter(),
            house,
            Set::NONE,
            subset_size,
            stop_after_first,
            &mut on_subset,
        ) {
            break;
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::{Candidate, Cell};
    use crate::strategy::test_support::grid_with_candidates;
    use crate::strategy::{find_all_technique_instances, Technique};

    #[test]
    fn pair_locks_its_digits() {
        let grid = grid_with_candidates(&[(0, &[4, 5]), (3, &[4, 5])]);
        let steps = find_all_technique_instances(&grid, Technique::NakedPair);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].base_cells, vec![Cell::new(0), Cell::new(3)]);
        assert!(steps[0].eliminations.contains(&Candidate::new(1, 4)));
        assert!(steps[0].eliminations.contains(&Candidate::new(8, 5)));
        assert_eq!(steps[0].eliminations.len(), 14);
    }

    #[test]
    fn triple_needs_exactly_three_digits() {
        let grid = grid_with_candidates(&[(0, &[4, 5]), (3, &[5, 6]), (5, &[4, 6])]);
        let steps = find_all_technique_instances(&grid, Technique::NakedTriple);
        assert_eq!(steps.len(), 1);
        assert_eq!(
            steps[0].base_cells,
            vec![Cell::new(0), Cell::new(3), Cell::new(5)]
        );
        assert!(steps[0].eliminations.contains(&Candidate::new(7, 6)));
    }
}
