use sudoku_techniques::{
    analyze_difficulty, find_all_technique_instances, find_next_logic_step, solve_sudoku,
    validate, Candidate, Cell, Digit, Grade, Grid, Technique,
};

#[rustfmt::skip]
const PUZZLE: [u8; 81] = [
    5, 3, 0, 0, 7, 0, 0, 0, 0,
    6, 0, 0, 1, 9, 5, 0, 0, 0,
    0, 9, 8, 0, 0, 0, 0, 6, 0,
    8, 0, 0, 0, 6, 0, 0, 0, 3,
    4, 0, 0, 8, 0, 3, 0, 0, 1,
    7, 0, 0, 0, 2, 0, 0, 0, 6,
    0, 6, 0, 0, 0, 0, 2, 8, 0,
    0, 0, 0, 4, 1, 9, 0, 0, 5,
    0, 0, 0, 0, 8, 0, 0, 7, 9,
];

#[test]
fn logic_steps_solve_the_puzzle_without_forcing() {
    let mut grid = Grid::from_slice(&PUZZLE).unwrap();
    let solution = solve_sudoku(&grid).unwrap();

    let mut n_steps = 0;
    while !grid.is_solved() {
        let step = find_next_logic_step(&grid, None)
            .expect("puzzle must resolve without the forcing-chain engine");
        assert!(Technique::ORDER.contains(&step.technique));
        grid.apply_step(&step);
        n_steps += 1;
        assert!(n_steps <= 100, "runaway step loop");
    }
    assert_eq!(grid, solution);
}

#[test]
fn next_step_is_never_a_later_technique_than_necessary() {
    let mut grid = Grid::from_slice(&PUZZLE).unwrap();
    while !grid.is_solved() {
        let step = match find_next_logic_step(&grid, None) {
            Some(step) => step,
            None => break,
        };
        let simpler = Technique::ORDER
            .iter()
            .take_while(|&&technique| technique != step.technique);
        for &technique in simpler {
            assert!(
                find_all_technique_instances(&grid, technique).is_empty(),
                "{:?} returned although {:?} applies",
                step.technique,
                technique,
            );
        }
        grid.apply_step(&step);
    }
}

#[test]
fn applying_steps_only_narrows_candidates() {
    let mut grid = Grid::from_slice(&PUZZLE).unwrap();
    for _ in 0..20 {
        let step = match find_next_logic_step(&grid, None) {
            Some(step) => step,
            None => break,
        };
        let before = grid;
        grid.apply_step(&step);

        for cell in Cell::all() {
            assert!(before.candidates(cell).contains(grid.candidates(cell)));
        }
        if let Some(placement) = step.placement {
            assert!(grid.candidates(placement.cell).is_empty());
            assert_eq!(grid.value(placement.cell), Some(placement.digit));
        }
    }
}

#[test]
fn focus_digit_narrows_the_search() {
    // two naked singles; with a focus only the matching one is reported
    let mut grid = Grid::from_slice(&[0; 81]).unwrap();
    for digit in Digit::all().filter(|&d| d.get() != 3) {
        grid.remove_candidate(Candidate { cell: Cell::new(0), digit });
    }
    for digit in Digit::all().filter(|&d| d.get() != 7) {
        grid.remove_candidate(Candidate { cell: Cell::new(40), digit });
    }

    let step = find_next_logic_step(&grid, Some(Digit::new(7))).unwrap();
    assert_eq!(step.technique, Technique::NakedSingle);
    assert_eq!(step.placement, Some(Candidate::new(40, 7)));
}

#[test]
fn difficulty_of_a_singles_puzzle() {
    let grade = analyze_difficulty(&PUZZLE).unwrap();
    assert!(grade <= Grade::Hard, "unexpected grade {}", grade);
}

#[test]
fn validation_accepts_and_rejects() {
    let grid = Grid::from_slice(&PUZZLE).unwrap();
    assert!(validate(&grid).is_ok());

    // 1..=8 in the first row plus a 9 below the free cell
    let mut flat = [0; 81];
    for (idx, slot) in flat.iter_mut().enumerate().take(8) {
        *slot = idx as u8 + 1;
    }
    flat[17] = 9;
    let unsolvable = Grid::from_slice(&flat).unwrap();
    assert!(validate(&unsolvable).is_err());
}

#[test]
fn malformed_puzzles_are_rejected_at_load() {
    assert!(Grid::from_slice(&[1; 81]).is_err());
    assert!(Grid::from_slice(&[0; 80]).is_err());
    assert!(analyze_difficulty(&[10; 81]).is_err());
}

#[test]
fn all_instances_are_deduplicated() {
    // digit 2's lone candidate cell is a hidden single in its row, column
    // and block at once, but must be reported exactly once
    let mut grid = Grid::from_slice(&[0; 81]).unwrap();
    for cell in Cell::all().skip(1) {
        grid.remove_candidate(Candidate {
            cell,
            digit: Digit::new(2),
        });
    }

    let steps = find_all_technique_instances(&grid, Technique::HiddenSingle);
    let hits = steps
        .iter()
        .filter(|step| step.placement == Some(Candidate::new(0, 2)))
        .count();
    assert_eq!(hits, 1);
}
