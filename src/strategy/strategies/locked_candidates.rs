use super::prelude::*;

// `pointing`: all candidates for a digit inside a block lie on one line,
// the digit goes away from the rest of the line (the line neighbors).
// Otherwise "claiming": all of a line's candidates lie inside one block,
// the digit goes away from the rest of the block (the block neighbors).
pub(crate) fn find_locked_candidates(
    cell_poss_digits: &CellArray<Set<Digit>>,
    pointing: bool,
    focus_digit: Option<Digit>,
    stop_after_first: bool,
    mut on_locked_candidates: impl FnMut(
        MiniLine,       // miniline the digit is locked to
        Digit,          // locked digit
        [MiniLine; 2],  // neighbor minilines the digit is impossible in
    ) -> bool,
) {
    for chute in Chute::all() {
        let mut miniline_poss_digits: [Set<Digit>; 9] = [Set::NONE; 9];

        {
            // compute possible digits for each miniline
            let minilines = chute.minilines();
            for (&miniline, poss_digs) in minilines.iter().zip(miniline_poss_digits.iter_mut()) {
                for cell in miniline.cells() {
                    *poss_digs |= cell_poss_digits[cell];
                }
            }
        }

        let mut line_unique_digits: [Set<Digit>; 3] = [Set::NONE; 3];
        let mut block_unique_digits: [Set<Digit>; 3] = [Set::NONE; 3];

        {
            let poss_digits = |chute_line, chute_block| miniline_poss_digits[chute_line * 3 + chute_block];
            for (chute_line, line_uniques) in line_unique_digits.iter_mut().enumerate() {
                *line_uniques = find_unique((0..3).map(|chute_block| poss_digits(chute_line, chute_block)));
            }
            for (chute_block, block_uniques) in block_unique_digits.iter_mut().enumerate() {
                *block_uniques = find_unique((0..3).map(|chute_line| poss_digits(chute_line, chute_block)));
            }
        }

        for (i, (&miniline, &poss_digits)) in chute
            .minilines()
            .iter()
            .zip(miniline_poss_digits.iter())
            .enumerate()
        {
            let chute_line = i / 3;
            let chute_block = i % 3;

            let (line_neighbors, block_neighbors) = miniline.neighbors();

            let (uniques, neighbors) = match pointing {
                true => (poss_digits & block_unique_digits[chute_block], line_neighbors),
                false => (poss_digits & line_unique_digits[chute_line], block_neighbors),
            };

            for digit in uniques {
                if focus_digit.map_or(false, |focus| focus != digit) {
                    continue;
                }
                // a lone candidate cell would be a single, not a locked candidate
                let n_cells = miniline
                    .cells()
                    .into_iter()
                    .filter(|&cell| cell_poss_digits[cell].contains(digit))
                    .count();
                if n_cells < 2 {
                    continue;
                }

                let found_conflicts = on_locked_candidates(miniline, digit, neighbors);
                if found_conflicts && stop_after_first {
                    return;
                }
            }
        }
    }
}

#[inline]
fn find_unique<I: Iterator<Item = Set<Digit>>>(possibilities: I) -> Set<Digit> {
    let mut unsolved = Set::NONE;
    let mut multiple_unsolved = Set::NONE;

    for poss_digits in possibilities {
        multiple_unsolved |= unsolved & poss_digits;
        unsolved |= poss_digits;
    }
    unsolved.without(multiple_unsolved)
}
