//! Detector orchestration.
//!
//! [`StepFinder`] derives the lookup caches every detector works from
//! (candidates per cell, solved digits per house, candidate positions per
//! house and digit) out of a grid snapshot, dispatches the detector
//! functions and assembles their raw pattern reports into [`Step`]s with
//! eliminations and explanations. Detectors never mutate the grid; applying
//! a step is the caller's move.

use crate::bitset::Set;
use crate::board::positions::IntoHouse;
use crate::board::{Candidate, Cell, Digit, Grid, House, Line, Position};
use crate::helper::{CellArray, DigitArray, HouseArray};
use crate::strategy::deduction::{join_iter, Step};
use crate::strategy::strategies::almost_locked_sets::cells_with_digit;
use crate::strategy::strategies::{self, Technique};
use crate::strategy::{forcing, links};
use std::collections::HashSet;

/// Finds the simplest deduction that applies to the grid.
///
/// Tries every technique of [`Technique::ORDER`] in order and returns the
/// first hit, so the result is never a harder technique than necessary.
/// With `focus_digit` set, single-digit techniques only report steps about
/// that digit.
///
/// `None` means no direct technique applies; the caller may fall back to
/// [`find_forcing_chain`](crate::strategy::find_forcing_chain).
pub fn find_next_logic_step(grid: &Grid, focus_digit: Option<Digit>) -> Option<Step> {
    let finder = StepFinder::new(grid);
    Technique::ORDER
        .iter()
        .find_map(|&technique| finder.find_one(technique, focus_digit))
}

/// Finds every instance of one technique in the grid, deduplicated by the
/// step's placement or its sorted elimination set.
///
/// For [`Technique::ForcingChain`] and [`Technique::Hypothesis`] this runs
/// the branch engine at its default depth and yields at most one step.
pub fn find_all_technique_instances(grid: &Grid, technique: Technique) -> Vec<Step> {
    match technique {
        Technique::ForcingChain => forcing::find_forcing_chain(grid, forcing::DEFAULT_MAX_DEPTH)
            .into_iter()
            .collect(),
        Technique::Hypothesis => forcing::find_hypothesis(grid, forcing::DEFAULT_MAX_DEPTH)
            .into_iter()
            .collect(),
        _ => StepFinder::new(grid).find_all(technique, None),
    }
}

pub(crate) struct StepFinder {
    cell_poss_digits: CellArray<Set<Digit>>,
    house_solved_digits: HouseArray<Set<Digit>>,
    house_poss_positions: HouseArray<DigitArray<Set<Position<House>>>>,
}

impl StepFinder {
    pub(crate) fn new(grid: &Grid) -> StepFinder {
        let mut house_solved_digits = HouseArray([Set::NONE; 27]);
        let mut house_poss_positions = HouseArray([DigitArray([Set::NONE; 9]); 27]);

        for cell in Cell::all() {
            if let Some(digit) = grid.value(cell) {
                house_solved_digits[cell.row().house()] |= digit;
                house_solved_digits[cell.col().house()] |= digit;
                house_solved_digits[cell.block().house()] |= digit;
            }
            for digit in grid.candidates(cell) {
                house_poss_positions[cell.row().house()][digit] |= cell.row_pos();
                house_poss_positions[cell.col().house()][digit] |= cell.col_pos();
                house_poss_positions[cell.block().house()][digit] |= cell.block_pos();
            }
        }

        StepFinder {
            cell_poss_digits: grid.candidates,
            house_solved_digits,
            house_poss_positions,
        }
    }

    pub(crate) fn find_one(&self, technique: Technique, focus_digit: Option<Digit>) -> Option<Step> {
        let mut results = vec![];
        self.find(technique, focus_digit, true, &mut results);
        results.into_iter().next()
    }

    pub(crate) fn find_all(&self, technique: Technique, focus_digit: Option<Digit>) -> Vec<Step> {
        let mut results = vec![];
        self.find(technique, focus_digit, false, &mut results);
        let mut seen = HashSet::new();
        results.retain(|step| seen.insert(step.key()));
        results
    }

    fn find(
        &self,
        technique: Technique,
        focus_digit: Option<Digit>,
        stop_after_first: bool,
        results: &mut Vec<Step>,
    ) {
        use self::Technique::*;
        match technique {
            NakedSingle => self.naked_singles(focus_digit, stop_after_first, results),
            HiddenSingle => self.hidden_singles(focus_digit, stop_after_first, results),
            Pointing => self.locked_candidates(true, focus_digit, stop_after_first, results),
            Claiming => self.locked_candidates(false, focus_digit, stop_after_first, results),
            NakedPair => self.naked_subsets(2, stop_after_first, results),
            HiddenPair => self.hidden_subsets(2, stop_after_first, results),
            NakedTriple => self.naked_subsets(3, stop_after_first, results),
            XWing => self.basic_fish(2, focus_digit, stop_after_first, results),
            Swordfish => self.basic_fish(3, focus_digit, stop_after_first, results),
            XyWing => self.xy_wing(stop_after_first, results),
            XCycle => self.x_cycle(focus_digit, stop_after_first, results),
            FinnedXWing => self.finned_xwing(focus_digit, stop_after_first, results),
            AlsXz => self.als_xz(stop_after_first, results),
            UniqueRectangle => self.unique_rectangle(stop_after_first, results),
            Bug => self.bug(results),
            // produced by the forcing engine, never by a scan
            ForcingChain | Hypothesis => {}
        }
    }

    fn naked_singles(&self, focus_digit: Option<Digit>, stop_after_first: bool, results: &mut Vec<Step>) {
        strategies::naked_singles::find_naked_singles(
            &self.cell_poss_digits,
            focus_digit,
            stop_after_first,
            |candidate| {
                let mut step = Step::new(Technique::NakedSingle);
                step.digit = Some(candidate.digit);
                step.base_cells.push(candidate.cell);
                step.target_cells.push(candidate.cell);
                step.placement = Some(candidate);
                step.explanation = format!(
                    "{} is the last candidate left in {}",
                    candidate.digit, candidate.cell,
                );
                results.push(step);
                true
            },
        );
    }

    fn hidden_singles(&self, focus_digit: Option<Digit>, stop_after_first: bool, results: &mut Vec<Step>) {
        strategies::hidden_singles::find_hidden_singles(
            &self.cell_poss_digits,
            focus_digit,
            stop_after_first,
            |candidate, house| {
                let mut step = Step::new(Technique::HiddenSingle);
                step.digit = Some(candidate.digit);
                step.base_cells.push(candidate.cell);
                step.target_cells.push(candidate.cell);
                step.placement = Some(candidate);
                step.explanation = format!(
                    "{} fits nowhere else in {}",
                    candidate.digit, house,
                );
                results.push(step);
                true
            },
        );
    }

    fn locked_candidates(
        &self,
        pointing: bool,
        focus_digit: Option<Digit>,
        stop_after_first: bool,
        results: &mut Vec<Step>,
    ) {
        let technique = match pointing {
            true => Technique::Pointing,
            false => Technique::Claiming,
        };
        strategies::locked_candidates::find_locked_candidates(
            &self.cell_poss_digits,
            pointing,
            focus_digit,
            stop_after_first,
            |miniline, digit, neighbors| {
                let mut eliminations = vec![];
                for &neighbor in &neighbors {
                    for cell in neighbor.cells() {
                        if self.cell_poss_digits[cell].contains(digit) {
                            eliminations.push(Candidate { cell, digit });
                        }
                    }
                }
                if eliminations.is_empty() {
                    return false;
                }

                let base_cells: Vec<Cell> = miniline
                    .cells()
                    .into_iter()
                    .filter(|&cell| self.cell_poss_digits[cell].contains(digit))
                    .collect();
                let mut step = Step::new(technique);
                step.digit = Some(digit);
                step.target_cells = eliminations.iter().map(|c| c.cell).collect();
                step.explanation = match pointing {
                    true => format!(
                        "in {}, all candidates for {} lie on {}; the rest of the line loses them",
                        miniline.block(),
                        digit,
                        miniline.line(),
                    ),
                    false => format!(
                        "in {}, all candidates for {} lie inside {}; the rest of the block loses them",
                        miniline.line(),
                        digit,
                        miniline.block(),
                    ),
                };
                step.base_cells = base_cells;
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn naked_subsets(&self, subset_size: u8, stop_after_first: bool, results: &mut Vec<Step>) {
        let technique = match subset_size {
            2 => Technique::NakedPair,
            _ => Technique::NakedTriple,
        };
        strategies::naked_subsets::find_naked_subsets(
            &self.cell_poss_digits,
            &self.house_solved_digits,
            subset_size,
            stop_after_first,
            |house, positions, digits| {
                let mut eliminations = vec![];
                for position in Set::<Position<House>>::ALL.without(positions) {
                    let cell = house.cell_at(position);
                    for digit in self.cell_poss_digits[cell] & digits {
                        eliminations.push(Candidate { cell, digit });
                    }
                }
                if eliminations.is_empty() {
                    return false;
                }

                let base_cells: Vec<Cell> =
                    positions.into_iter().map(|pos| house.cell_at(pos)).collect();
                let mut step = Step::new(technique);
                step.target_cells = eliminations.iter().map(|c| c.cell).collect();
                step.explanation = format!(
                    "{} only hold the candidates {}, which locks those out of the rest of {}",
                    join_iter(base_cells.iter()),
                    join_iter(digits),
                    house,
                );
                step.base_cells = base_cells;
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn hidden_subsets(&self, subset_size: u8, stop_after_first: bool, results: &mut Vec<Step>) {
        strategies::hidden_subsets::find_hidden_subsets(
            &self.house_solved_digits,
            &self.house_poss_positions,
            subset_size,
            stop_after_first,
            |house, digits, positions| {
                // each digit must be restricted to exactly these cells,
                // otherwise the pattern degenerates
                for digit in digits {
                    if self.house_poss_positions[house][digit] != positions {
                        return false;
                    }
                }

                let base_cells: Vec<Cell> =
                    positions.into_iter().map(|pos| house.cell_at(pos)).collect();
                let mut eliminations = vec![];
                for &cell in &base_cells {
                    for digit in self.cell_poss_digits[cell].without(digits) {
                        eliminations.push(Candidate { cell, digit });
                    }
                }
                if eliminations.is_empty() {
                    return false;
                }

                let mut step = Step::new(Technique::HiddenPair);
                step.target_cells = base_cells.clone();
                step.explanation = format!(
                    "in {}, the candidates {} fit only into {}; those cells hold nothing else",
                    house,
                    join_iter(digits),
                    join_iter(base_cells.iter()),
                );
                step.base_cells = base_cells;
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn basic_fish(
        &self,
        goal_depth: u8,
        focus_digit: Option<Digit>,
        stop_after_first: bool,
        results: &mut Vec<Step>,
    ) {
        let technique = match goal_depth {
            2 => Technique::XWing,
            _ => Technique::Swordfish,
        };
        strategies::basic_fish::find_fish(
            &self.house_poss_positions,
            goal_depth,
            focus_digit,
            stop_after_first,
            |digit, all_lines, line_set, union_positions| {
                let mut eliminations = vec![];
                for line in all_lines.without(line_set) {
                    for position in union_positions {
                        let cell = line.cell_at(position);
                        if self.cell_poss_digits[cell].contains(digit) {
                            eliminations.push(Candidate { cell, digit });
                        }
                    }
                }
                if eliminations.is_empty() {
                    return false;
                }

                let mut base_cells = vec![];
                for line in line_set {
                    for position in union_positions {
                        let cell = line.cell_at(position);
                        if self.cell_poss_digits[cell].contains(digit) {
                            base_cells.push(cell);
                        }
                    }
                }
                let mut step = Step::new(technique);
                step.digit = Some(digit);
                step.target_cells = eliminations.iter().map(|c| c.cell).collect();
                step.explanation = format!(
                    "{} is confined to the same {} positions in {}; the crossing lines lose it elsewhere",
                    digit,
                    goal_depth,
                    join_iter(line_set),
                );
                step.base_cells = base_cells;
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn finned_xwing(&self, focus_digit: Option<Digit>, stop_after_first: bool, results: &mut Vec<Step>) {
        strategies::finned_fish::find_finned_xwing(
            &self.house_poss_positions,
            focus_digit,
            stop_after_first,
            |digit, base_lines, shared_positions, fins| {
                let all_lines = match base_lines[0].get() < 9 {
                    true => Line::ALL_ROWS,
                    false => Line::ALL_COLS,
                };
                let mut eliminations = vec![];
                for line in all_lines.without(base_lines[0].as_set() | base_lines[1]) {
                    for position in shared_positions {
                        let cell = line.cell_at(position);
                        if self.cell_poss_digits[cell].contains(digit)
                            && fins.into_iter().all(|fin| cell.sees(fin))
                        {
                            eliminations.push(Candidate { cell, digit });
                        }
                    }
                }
                if eliminations.is_empty() {
                    return false;
                }

                let mut base_cells = vec![];
                for &line in &base_lines {
                    for position in shared_positions {
                        let cell = line.cell_at(position);
                        if self.cell_poss_digits[cell].contains(digit) {
                            base_cells.push(cell);
                        }
                    }
                }
                base_cells.extend(fins);
                let mut step = Step::new(Technique::FinnedXWing);
                step.digit = Some(digit);
                step.target_cells = eliminations.iter().map(|c| c.cell).collect();
                step.explanation = format!(
                    "{} forms an x-wing on {} and {} with fins at {}; cells guarded by every fin lose it",
                    digit,
                    base_lines[0],
                    base_lines[1],
                    join_iter(fins),
                );
                step.base_cells = base_cells;
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn xy_wing(&self, stop_after_first: bool, results: &mut Vec<Step>) {
        strategies::xy_wing::find_xy_wing(
            &self.cell_poss_digits,
            stop_after_first,
            |(pivot, pivot_digits), pincers, shared_digit| {
                let [(pincer1, _), (pincer2, _)] = pincers;
                let mut eliminations = vec![];
                for cell in pincer1.peers() & pincer2.peers() {
                    if self.cell_poss_digits[cell].contains(shared_digit) {
                        eliminations.push(Candidate {
                            cell,
                            digit: shared_digit,
                        });
                    }
                }
                if eliminations.is_empty() {
                    return false;
                }

                let mut step = Step::new(Technique::XyWing);
                step.digit = Some(shared_digit);
                step.base_cells = vec![pivot, pincer1, pincer2];
                step.target_cells = eliminations.iter().map(|c| c.cell).collect();
                step.explanation = format!(
                    "either way {} ({}) goes, one of {} and {} becomes {}; cells seeing both lose it",
                    pivot,
                    join_iter(pivot_digits),
                    pincer1,
                    pincer2,
                    shared_digit,
                );
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn x_cycle(&self, focus_digit: Option<Digit>, stop_after_first: bool, results: &mut Vec<Step>) {
        strategies::x_cycle::find_x_cycles(
            &self.house_poss_positions,
            focus_digit,
            stop_after_first,
            |digit, color_a, color_b| {
                let component = color_a | color_b;
                let mut eliminations = vec![];
                for cell in Cell::all() {
                    if component.contains(cell) || !self.cell_poss_digits[cell].contains(digit) {
                        continue;
                    }
                    if cell.peers().overlaps(color_a) && cell.peers().overlaps(color_b) {
                        eliminations.push(Candidate { cell, digit });
                    }
                }
                if eliminations.is_empty() {
                    return false;
                }

                let pairs = links::conjugate_pairs(&self.house_poss_positions, digit);
                let mut step = Step::new(Technique::XCycle);
                step.digit = Some(digit);
                step.base_cells = component.into_iter().collect();
                step.target_cells = eliminations.iter().map(|c| c.cell).collect();
                step.links = links::component_links(&pairs, component, digit);
                step.explanation = format!(
                    "the strong links on {} at {} close an odd loop; every outside cell seeing both colors of the loop loses {}",
                    digit,
                    join_iter(component),
                    digit,
                );
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn als_xz(&self, stop_after_first: bool, results: &mut Vec<Step>) {
        strategies::almost_locked_sets::find_als_xz(
            &self.cell_poss_digits,
            stop_after_first,
            |als1, als2, restricted_common, elimination_digit| {
                let z = elimination_digit;
                let z_cells =
                    cells_with_digit(&self.cell_poss_digits, als1.cells, z)
                        | cells_with_digit(&self.cell_poss_digits, als2.cells, z);
                let both = als1.cells | als2.cells;
                let mut eliminations = vec![];
                for cell in Cell::all() {
                    if both.contains(cell) || !self.cell_poss_digits[cell].contains(z) {
                        continue;
                    }
                    if z_cells.into_iter().all(|z_cell| cell.sees(z_cell)) {
                        eliminations.push(Candidate { cell, digit: z });
                    }
                }
                if eliminations.is_empty() {
                    return false;
                }

                let mut step = Step::new(Technique::AlsXz);
                step.digit = Some(z);
                step.base_cells = both.into_iter().collect();
                step.target_cells = eliminations.iter().map(|c| c.cell).collect();
                step.als_sets = vec![
                    als1.cells.into_iter().collect(),
                    als2.cells.into_iter().collect(),
                ];
                step.explanation = format!(
                    "the almost locked sets {} and {} share the restricted common {}; one of them must swallow {}, so cells seeing all its spots lose it",
                    join_iter(als1.cells),
                    join_iter(als2.cells),
                    restricted_common,
                    z,
                );
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn unique_rectangle(&self, stop_after_first: bool, results: &mut Vec<Step>) {
        strategies::unique_rectangle::find_unique_rectangles(
            &self.cell_poss_digits,
            stop_after_first,
            |floor, roof, pair| {
                let conflicts = self.cell_poss_digits[roof] & pair;
                let eliminations: Vec<Candidate> = conflicts
                    .into_iter()
                    .map(|digit| Candidate { cell: roof, digit })
                    .collect();
                if eliminations.is_empty() {
                    return false;
                }

                let mut step = Step::new(Technique::UniqueRectangle);
                step.base_cells = floor.to_vec();
                step.target_cells.push(roof);
                step.explanation = format!(
                    "{} and {} form a rectangle on {}; keeping {} in {} would allow two solutions",
                    join_iter(floor.iter()),
                    roof,
                    join_iter(pair),
                    join_iter(conflicts),
                    roof,
                );
                step.eliminations = eliminations;
                results.push(step);
                true
            },
        );
    }

    fn bug(&self, results: &mut Vec<Step>) {
        strategies::bug::find_bug_plus_one(
            &self.cell_poss_digits,
            &self.house_poss_positions,
            |candidate| {
                let mut step = Step::new(Technique::Bug);
                step.digit = Some(candidate.digit);
                step.base_cells.push(candidate.cell);
                step.target_cells.push(candidate.cell);
                step.placement = Some(candidate);
                step.explanation = format!(
                    "every other cell is down to two candidates; without {} in {} the grid would be a deadly pattern with two solutions",
                    candidate.digit, candidate.cell,
                );
                results.push(step);
                true
            },
        );
    }
}
