use super::prelude::*;

pub(crate) fn find_hidden_subsets(
    house_solved_digits: &HouseArray<Set<Digit>>,
    house_poss_positions: &HouseArray<DigitArray<Set<Position<House>>>>,
    subset_size: u8,
    stop_after_first: bool,
    mut on_subset: impl FnMut(House, Set<Digit>, Set<Position<House>>) -> bool,
) {
    fn walk_combinations(
        house_poss_positions: &DigitArray<Set<Position<House>>>,
        total_poss_positions: Set<Position<House>>,
        digits: SetIter<Digit>,
        house: House,
        digit_set: Set<Digit>,
        subset_size: u8,
        stop_after_first: bool,
        on_subset: &mut impl FnMut(House, Set<Digit>, Set<Position<House>>) -> bool,
    ) -> bool {
        if digit_set.len() > subset_size {
            return false;
        }
        if digit_set.len() == subset_size
            && total_poss_positions.len() == subset_size
            && on_subset(house, digit_set, total_poss_positions)
            && stop_after_first
        {
            return true;
        }

        let mut digits = digits;
        while let Some(digit) = digits.next() {
            let poss_positions = house_poss_positions[digit];
            // no remaining position means the digit is entered already
            if poss_positions.is_empty() {
                continue;
            }
            let new_digit_set = digit_set | digit.as_set();
            let new_total_poss_positions = total_poss_positions | poss_positions;
            if walk_combinations(
                house_poss_positions,
                new_total_poss_positions,
                digits.clone(),
                house,
                new_digit_set,
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
            &house_poss_positions[house],
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
    use crate::board::{Candidate, Cell, Grid};
    use crate::strategy::{find_all_technique_instances, Technique};

    #[test]
    fn pair_strips_other_candidates() {
        // 1 and 2 fit only into r1c1 and r1c2
        let mut grid = Grid::from_slice(&[0; 81]).unwrap();
        for cell in 2..9 {
            grid.remove_candidate(Candidate::new(cell, 1));
            grid.remove_candidate(Candidate::new(cell, 2));
        }

        let steps = find_all_technique_instances(&grid, Technique::HiddenPair);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].base_cells, vec![Cell::new(0), Cell::new(1)]);
        assert_eq!(steps[0].eliminations.len(), 14);
        assert!(steps[0].eliminations.contains(&Candidate::new(0, 9)));
        assert!(steps[0].eliminations.contains(&Candidate::new(1, 3)));
    }
}
