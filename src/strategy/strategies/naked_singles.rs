use super::prelude::*;

pub(crate) fn find_naked_singles(
    cell_poss_digits: &CellArray<Set<Digit>>,
    focus_digit: Option<Digit>,
    stop_after_first: bool,
    mut on_single: impl FnMut(Candidate) -> bool,
) {
    for (cell, &poss_digits) in Cell::all().zip(cell_poss_digits.iter()) {
        // if Err(_), the set is empty and the cell is already solved
        // (or the position inconsistent); skip in that case (via unwrap_or)
        if let Some(digit) = poss_digits.unique().unwrap_or(None) {
            if focus_digit.map_or(false, |focus| focus != digit) {
                continue;
            }
            if on_single(Candidate { cell, digit }) && stop_after_first {
                return;
            }
        }
    }
}
