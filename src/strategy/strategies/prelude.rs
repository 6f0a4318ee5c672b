pub(crate) use crate::bitset::{Iter as SetIter, Set};
pub(crate) use crate::helper::{CellArray, DigitArray, HouseArray};
#[rustfmt::skip]
pub(crate) use crate::board::{
    Digit,
    Candidate,
    positions::{
        Cell,
        Chute,
        Line,
        MiniLine,
        Position,
        House,
    },
};
